//! Physical page geometry

use serde::{Deserialize, Serialize};

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}

/// Physical description of a page and its row capacity.
///
/// `rows_per_page` counts all visual rows: column headers, data rows,
/// subheaders, footnote and source lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub orientation: Orientation,
    /// Page width in inches
    pub width: f32,
    /// Page height in inches
    pub height: f32,
    /// Margins: left, right, top, bottom, header, footer
    pub margins: [f32; 6],
    /// Total visual rows a page may carry, fixtures included
    pub rows_per_page: usize,
    /// Total width available to table columns
    pub col_total_width: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::portrait()
    }
}

impl PageGeometry {
    /// Portrait defaults
    pub fn portrait() -> Self {
        Self {
            orientation: Orientation::Portrait,
            width: 8.5,
            height: 11.0,
            margins: [1.25, 1.0, 1.75, 1.25, 1.75, 1.00625],
            rows_per_page: 40,
            col_total_width: 8.5 - 2.25,
        }
    }

    /// Landscape defaults
    pub fn landscape() -> Self {
        Self {
            orientation: Orientation::Landscape,
            width: 11.0,
            height: 8.5,
            margins: [1.0, 1.0, 2.0, 1.25, 1.25, 1.25],
            rows_per_page: 24,
            col_total_width: 11.0 - 2.5,
        }
    }

    /// Override the row capacity
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    /// Get usable width between the side margins
    pub fn content_width(&self) -> f32 {
        self.width - self.margins[0] - self.margins[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_defaults() {
        let geometry = PageGeometry::portrait();
        assert_eq!(geometry.orientation, Orientation::Portrait);
        assert_eq!(geometry.width, 8.5);
        assert_eq!(geometry.height, 11.0);
        assert_eq!(geometry.rows_per_page, 40);
        assert_eq!(geometry.col_total_width, 6.25);
        assert_eq!(geometry.content_width(), 6.25); // 8.5 - 1.25 - 1.0
    }

    #[test]
    fn test_landscape_defaults() {
        let geometry = PageGeometry::landscape();
        assert_eq!(geometry.orientation, Orientation::Landscape);
        assert_eq!(geometry.width, 11.0);
        assert_eq!(geometry.rows_per_page, 24);
        assert_eq!(geometry.col_total_width, 8.5);
        assert_eq!(geometry.content_width(), 9.0); // 11.0 - 1.0 - 1.0
    }

    #[test]
    fn test_default_is_portrait() {
        assert_eq!(PageGeometry::default(), PageGeometry::portrait());
    }

    #[test]
    fn test_with_rows_per_page() {
        let geometry = PageGeometry::portrait().with_rows_per_page(12);
        assert_eq!(geometry.rows_per_page, 12);
        assert_eq!(geometry.width, 8.5);
    }
}
