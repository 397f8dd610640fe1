#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for name in ["ErrorResponse", "HealthResponse", "DashboardView", "DashboardOptions", "Availability"] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        for field in ["status", "version", "artifacts"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_dashboard_view_schema_structure() {
        let properties = object_properties("DashboardView");
        for field in ["selection", "comparison", "detail", "status_banner"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_openapi_paths_are_documented() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/health",
            "/api/v1/options",
            "/api/v1/dashboard",
            "/api/v1/availability",
            "/api/v1/plots/{ticker}",
            "/api/v1/forecasts/{ticker}/download",
        ] {
            let item = openapi.paths.paths.get(path).unwrap_or_else(|| panic!("missing path {}", path));
            assert!(item.operations.contains_key(&PathItemType::Get), "{} has no GET", path);
        }

        let download = &openapi.paths.paths["/api/v1/forecasts/{ticker}/download"].operations[&PathItemType::Get];
        for status in ["200", "404", "409", "422"] {
            assert!(download.responses.responses.contains_key(status), "download lacks {}", status);
        }
    }
}
