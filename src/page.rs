use v_htmlescape::escape;

use crate::dom::{Document, FieldValue, FORM_ID};

/// Render the recommendation page from the current state of its elements
///
/// The page declares every element id the form handler depends on. Field
/// values and the results content are written as they currently stand.
pub fn render_index_page(document: &Document) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Customer Recommendations</title>
</head>
<body>
  <h1>Customer Recommendations</h1>
  <form id="{form_id}">
    <label for="{customer_id}">Customer ID</label>
    <input type="text" id="{customer_id}" name="{customer_id}" value="{customer_value}" required>
    <label for="{top_n}">Number of recommendations</label>
    <input type="number" id="{top_n}" name="{top_n}" value="{top_n_value}" min="1">
    <button type="submit">Recommend</button>
  </form>
  <div id="{results}">{results_content}</div>
</body>
</html>
"#,
        form_id = FORM_ID,
        customer_id = document.customer_id.id(),
        customer_value = escape(&document.customer_id.value()),
        top_n = document.top_n.id(),
        top_n_value = escape(&document.top_n.value()),
        results = document.results.id(),
        results_content = document.results.content(),
    )
}
