use super::dashboard;
use super::theme;
use super::util::escape_html;
use crate::models::MonthView;

/// Full HTML document for the month overview.
pub(crate) fn render_overview(view: &MonthView, saved: bool) -> String {
    render_page(
        &format!("Budget · {}", view.month_label),
        &dashboard::render(view, saved),
    )
}

fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}
<script>{script}</script>
</body>
</html>
"#,
        title = escape_html(title),
        style = theme::stylesheet(),
        script = theme::SCRIPT,
    )
}
