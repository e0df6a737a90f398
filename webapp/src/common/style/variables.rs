// each theme only redefines the palette; layout and spacing are shared
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;

  /* Radii */
  --radius-md: 8px;
  --radius-lg: 12px;

  /* Motion */
  --transition-fast: 150ms;
  --transition-flip: 600ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);

  --card-size: 260px;
}

.theme-nebula {
  --background: linear-gradient(to bottom, #0b132b, #1c2541, #3a506b);
  --surface: rgba(28, 37, 65, 0.92);
  --text-primary: #FFFFFF;
  --text-secondary: #C9D6EA;
  --primary: #5BC0BE;
  --primary-dark: #3A9C9A;
  --error: #FF6B6B;
  --input-border: #CCCCCC;
  --shadow-card: 0 4px 14px rgba(0, 0, 0, 0.45);
}

.theme-daylight {
  --background: linear-gradient(to bottom, #F9FAFB, #E5E7EB);
  --surface: #FFFFFF;
  --text-primary: #111827;
  --text-secondary: #4B5563;
  --primary: #3B82F6;
  --primary-dark: #2563EB;
  --error: #EF4444;
  --input-border: #D1D5DB;
  --shadow-card: 0 4px 10px rgba(0, 0, 0, 0.12);
}
"#;
