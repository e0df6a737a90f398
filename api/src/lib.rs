pub mod image;
pub mod search;

// root of the public NASA image library api
//
// requests are built relative to this so that the webapp config can point at a
// mirror or a local fixture server instead
pub const NASA_API_ROOT: &str = "https://images-api.nasa.gov";

// the api never advertises its page size, but every full page observed so far
// has held exactly this many items
pub const DEFAULT_PAGE_SIZE: usize = 100;
