//! Route templating: `{placeholder}` substitution for REST paths.

use crate::error::SdkError;

/// Substitute every `{name}` placeholder in `route` with its value from `params`.
///
/// Values are percent-encoded as path segments. Parameters that don't appear in
/// the route are ignored; a placeholder without a parameter is an error.
pub fn render_route(route: &str, params: &[(&str, &str)]) -> Result<String, SdkError> {
    let mut out = String::with_capacity(route.len());
    let mut rest = route;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            SdkError::Validation(format!("Unterminated placeholder in route {}", route))
        })?;
        let name = &after[..close];

        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| SdkError::MissingRouteParam(name.to_string()))?;

        out.push_str(&urlencoding::encode(value));
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_route_substitutes_all_placeholders() {
        let url = render_route(
            "/v1/accounts/{account_id}/orders/{order_id}",
            &[("account_id", "5517316"), ("order_id", "42")],
        )
        .unwrap();
        assert_eq!(url, "/v1/accounts/5517316/orders/42");
    }

    #[test]
    fn test_render_route_without_placeholders() {
        assert_eq!(render_route("/v1/candles", &[]).unwrap(), "/v1/candles");
    }

    #[test]
    fn test_render_route_repeated_placeholder() {
        let url = render_route("/{a}/x/{a}", &[("a", "1")]).unwrap();
        assert_eq!(url, "/1/x/1");
    }

    #[test]
    fn test_render_route_missing_param() {
        let err = render_route("/v1/accounts/{account_id}/trades/{trade_id}", &[("account_id", "1")])
            .unwrap_err();
        assert!(matches!(err, SdkError::MissingRouteParam(ref name) if name == "trade_id"));
    }

    #[test]
    fn test_render_route_encodes_values() {
        let url = render_route("/v1/accounts/{account_id}/positions/{instrument}", &[
            ("account_id", "1"),
            ("instrument", "EUR/USD"),
        ])
        .unwrap();
        assert_eq!(url, "/v1/accounts/1/positions/EUR%2FUSD");
    }

    #[test]
    fn test_render_route_unterminated_placeholder() {
        let err = render_route("/v1/accounts/{account_id", &[("account_id", "1")]).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
