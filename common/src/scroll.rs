// true once the visible bottom edge of a scroller is within `threshold` pixels of the
// end of its content
//
// content that does not overflow at all also counts, otherwise a short first page
// could never ask for the second one
pub fn near_bottom(scroll_top: f64, client_height: f64, scroll_height: f64, threshold: f64) -> bool {
    scroll_height - (scroll_top + client_height) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_from_bottom() {
        assert!(!near_bottom(0.0, 800.0, 5000.0, 300.0));
    }

    #[test]
    fn within_threshold() {
        assert!(near_bottom(3950.0, 800.0, 5000.0, 300.0));
        assert!(near_bottom(3900.0, 800.0, 5000.0, 300.0));
        assert!(!near_bottom(3899.0, 800.0, 5000.0, 300.0));
    }

    #[test]
    fn short_content_counts_as_bottom() {
        assert!(near_bottom(0.0, 800.0, 600.0, 300.0));
    }
}
