//! Standalone HTML pages around highlighted code

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use super::stylesheet;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
pre.code \{ font-family: "Inconsolata", monospace; }
{stylesheet | unescaped}</style>
</head>
<body>
<pre class="code" data-language="{language}">{markup | unescaped}</pre>
</body>
</html>
"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    language: &'a str,
    stylesheet: String,
    markup: &'a str,
}

/// Embed highlighted markup in a complete HTML document carrying the
/// default stylesheet. The title and language are escaped; the markup is
/// inserted as is.
pub fn document(
    title: &str,
    language: &str,
    markup: &str,
) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("document", TEMPLATE)?;

    let context = Context {
        title,
        language,
        stylesheet: stylesheet(),
        markup,
    };

    let rendered = tt.render("document", &context)?;
    debug!("Rendered document of {} bytes", rendered.len());

    Ok(rendered)
}
