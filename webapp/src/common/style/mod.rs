use constcat::concat;

mod components;
mod variables;

pub use components::{BASE_COMPONENTS, DETAIL, GALLERY};
pub use variables::CSS_VARIABLES;

// everything is injected once from App, so components only need class names
pub const GALLERY_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

.app {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 20px;
  background: var(--background);
  color: var(--text-primary);
}

.app-header {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 20px;
}

.app-header h1 {
  font-size: 2rem;
  color: var(--text-primary);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    GALLERY,
    DETAIL
);
