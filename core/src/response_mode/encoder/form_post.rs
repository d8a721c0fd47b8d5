use std::fmt::Write;

use html_escape::encode_double_quoted_attribute;
use indexmap::IndexMap;
use url::Url;

use crate::response_mode::encoder::{EncodingContext, ResponseModeEncoder, Result};
use crate::response_mode::AuthorizationResponse;

pub(crate) struct FormPostEncoder;

impl ResponseModeEncoder for FormPostEncoder {
    fn encode(
        &self,
        context: &EncodingContext,
        parameters: IndexMap<String, String>,
    ) -> Result<AuthorizationResponse> {
        Ok(AuthorizationResponse::FormPost(
            context.redirect_uri.clone(),
            parameters,
        ))
    }
}

/// Self-submitting HTML document POSTing the parameters to the redirect
/// URI. One hidden input per parameter, values attribute-escaped, with a
/// no-script fallback button. A permissive parser scanning hidden inputs
/// recovers the parameters exactly as supplied.
pub fn render_html(action: &Url, parameters: &IndexMap<String, String>) -> String {
    let mut inputs = String::new();
    for (name, value) in parameters {
        let _ = writeln!(
            inputs,
            r#"            <input type="hidden" name="{}" value="{}"/>"#,
            encode_double_quoted_attribute(name),
            encode_double_quoted_attribute(value)
        );
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8"/>
        <title>Submit this form</title>
    </head>
    <body>
        <form method="POST" action="{}">
{}            <noscript>
                <button type="submit">Continue</button>
            </noscript>
        </form>
        <script>
            document.forms[0].submit();
        </script>
    </body>
</html>
"#,
        encode_double_quoted_attribute(action.as_str()),
        inputs
    )
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use url::Url;

    use crate::response_mode::encoder::form_post::render_html;

    #[test]
    fn test_renders_one_hidden_input_per_parameter() {
        let mut params = IndexMap::new();
        params.insert("code".to_string(), "some_code".to_string());
        params.insert("state".to_string(), "12345678901234567890".to_string());

        let url = Url::parse("https://www.test.com/callback").unwrap();
        let html = render_html(&url, &params);

        assert!(html.contains(r#"<form method="POST" action="https://www.test.com/callback">"#));
        assert!(html.contains(r#"<input type="hidden" name="code" value="some_code"/>"#));
        assert!(
            html.contains(r#"<input type="hidden" name="state" value="12345678901234567890"/>"#)
        );
        assert!(html.contains("<noscript>"));
        assert!(html.contains("document.forms[0].submit()"));
    }

    #[test]
    fn test_values_are_attribute_escaped() {
        let mut params = IndexMap::new();
        params.insert(
            "error_hint".to_string(),
            r#"The client is not allowed to request response_mode "form_post"."#.to_string(),
        );

        let url = Url::parse("https://www.test.com/callback").unwrap();
        let html = render_html(&url, &params);

        assert!(html.contains(
            r#"value="The client is not allowed to request response_mode &quot;form_post&quot;.""#
        ));
    }
}
