pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  background-color: var(--primary);
  color: white;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

/* Search */
.search-bar {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.search-bar input {
  padding: 10px;
  width: 250px;
  border-radius: var(--radius-md);
  border: 1px solid var(--input-border);
  font-size: 1rem;
}

.search-status {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.error-state {
  color: var(--error);
  margin-bottom: var(--space-4);
}

.empty-state, .end-state, .loading-state {
  text-align: center;
  color: var(--text-secondary);
  margin: var(--space-6) 0;
}
"#;

pub const GALLERY: &str = r#"
.gallery-scroll {
  width: 100%;
  height: calc(100vh - 220px);
  overflow-y: auto;
}

.card-grid {
  display: grid;
  gap: var(--space-4);
  grid-template-columns: repeat(auto-fill, minmax(var(--card-size), 1fr));
  padding: var(--space-2);
}

/* Flip cards: the front face holds the image, hover turns the card over */
.flip-card {
  height: var(--card-size);
  perspective: 1000px;
}

.flip-card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform var(--transition-flip) var(--easing-standard);
  transform-style: preserve-3d;
}

.flip-card:hover .flip-card-inner {
  transform: rotateY(180deg);
}

.flip-card-front, .flip-card-back {
  position: absolute;
  inset: 0;
  border-radius: var(--radius-lg);
  overflow: hidden;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
  box-shadow: var(--shadow-card);
}

.flip-card-front img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.flip-card-back {
  transform: rotateY(180deg);
  background: var(--surface);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-3);
  padding: var(--space-4);
  text-align: center;
}

.flip-card-back .title {
  font-size: 1rem;
  font-weight: 600;
}

.flip-card-back .date {
  font-size: 0.875rem;
  color: var(--text-secondary);
}
"#;

pub const DETAIL: &str = r#"
.detail {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-6);
}

.detail-image {
  max-width: 90vw;
  max-height: 75vh;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-card);
}

.detail-url {
  word-break: break-all;
  color: var(--text-secondary);
  font-size: 0.875rem;
}
"#;
