//! Line formatting for content store entries.

use crate::models::Project;

const BAR_WIDTH: usize = 20;

/// Render a completion percentage as a fixed-width bracketed bar.
///
/// The bar always has [`BAR_WIDTH`] cells; `round(pct / 100 * 20)` are
/// filled. Out-of-range input clamps to 0-100.
pub fn render_progress_bar(pct: u8) -> String {
    let pct = pct.min(100) as f64;
    let filled = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Render one project as a display line with link, description and bar.
pub fn render_project_line(project: &Project) -> String {
    format!(
        r#"* <a href="{}">{}</a> - <white>{}</white> <green>[{}%]</green> {}"#,
        project.url,
        project.name,
        project.description,
        project.progress,
        render_progress_bar(project.progress)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bar() {
        assert_eq!(render_progress_bar(0), format!("[{}]", " ".repeat(20)));
    }

    #[test]
    fn test_full_bar() {
        assert_eq!(render_progress_bar(100), format!("[{}]", "=".repeat(20)));
    }

    #[test]
    fn test_half_bar() {
        let bar = render_progress_bar(50);
        assert_eq!(bar, format!("[{}{}]", "=".repeat(10), " ".repeat(10)));
    }

    #[test]
    fn test_rounding() {
        // 33% of 20 cells = 6.6, rounds to 7.
        let bar = render_progress_bar(33);
        assert_eq!(bar.matches('=').count(), 7);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(render_progress_bar(250), render_progress_bar(100));
    }

    #[test]
    fn test_bar_width_is_constant() {
        for pct in [0u8, 1, 49, 50, 99, 100] {
            assert_eq!(render_progress_bar(pct).len(), BAR_WIDTH + 2);
        }
    }
}
