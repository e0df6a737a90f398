// target-independent pieces of the gallery
//
// nothing in here touches the dom or the network, so the rules the webapp relies on
// (paging, debouncing, stale response suppression) can be exercised with a plain
// cargo test
pub mod config;
pub mod debounce;
pub mod gallery;
pub mod scroll;
