use std::fmt::Write;

use v_htmlescape::escape;

use crate::models::{ErrorResult, RecommendationResult, RenderInstruction};

pub const RECOMMENDATIONS_HEADING: &str = "Recommended Products:";

/// Render the full replacement content of the results container
pub fn render(instruction: &RenderInstruction) -> String {
    match instruction {
        RenderInstruction::Recommendations(result) => render_recommendations(result),
        RenderInstruction::Error(error) => render_error(error),
    }
}

/// Heading plus one `<li>` per item, in the order given
pub fn render_recommendations(result: &RecommendationResult) -> String {
    let mut html = format!("<h3>{}</h3><ul>", RECOMMENDATIONS_HEADING);
    for item in &result.items {
        // Writing to a String cannot fail
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>");
    html
}

pub fn render_error(error: &ErrorResult) -> String {
    format!(
        "<p style=\"color:red;\">Error: {}</p>",
        escape(&error.detail)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> RecommendationResult {
        RecommendationResult::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_renders_items_in_order() {
        let html = render(&RenderInstruction::Recommendations(items(&["A", "B", "C"])));
        assert_eq!(
            html,
            "<h3>Recommended Products:</h3><ul><li>A</li><li>B</li><li>C</li></ul>"
        );
    }

    #[test]
    fn test_empty_result_keeps_heading() {
        let html = render(&RenderInstruction::Recommendations(items(&[])));
        assert_eq!(html, "<h3>Recommended Products:</h3><ul></ul>");
    }

    #[test]
    fn test_error_paragraph() {
        let html = render(&RenderInstruction::Error(ErrorResult::new("Customer not found")));
        assert_eq!(html, "<p style=\"color:red;\">Error: Customer not found</p>");
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_markup_in_items_is_escaped() {
        let html = render_recommendations(&items(&["<b>Mug & Saucer"]));
        assert!(html.contains("<li>&lt;b&gt;Mug &amp; Saucer</li>"));
        assert!(!html.contains("<b>"));
    }
}
