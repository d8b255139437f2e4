/// A named field of the `Report` row accepted by the ingest endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportParam {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> ReportParam {
    ReportParam {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> ReportParam {
    ReportParam {
        name,
        required: false,
    }
}

/// Declared parameters in column order; required ones are checked in this order.
pub static REPORT_PARAMS: [ReportParam; 11] = [
    required("source"),
    optional("source_version"),
    required("document_id"),
    required("font_name"),
    optional("font_version"),
    optional("font_styles"),
    optional("font_features"),
    required("language_tag"),
    optional("ip_address"),
    optional("event_time"),
    required("event_type"),
];

pub fn required_params() -> impl Iterator<Item = &'static str> {
    REPORT_PARAMS
        .iter()
        .filter(|param| param.required)
        .map(|param| param.name)
}

pub fn is_declared(name: &str) -> bool {
    REPORT_PARAMS.iter().any(|param| param.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_params_keep_declaration_order() {
        let names: Vec<_> = required_params().collect();
        assert_eq!(
            names,
            ["source", "document_id", "font_name", "language_tag", "event_type"]
        );
    }

    #[test]
    fn optional_params_are_declared() {
        assert!(is_declared("ip_address"));
        assert!(is_declared("font_features"));
        assert!(!is_declared("color"));
        assert!(!is_declared("Source"));
    }
}
