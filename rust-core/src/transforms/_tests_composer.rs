#[cfg(test)]
mod tests {
    use super::super::composer::TransformComposer;
    use crate::config::DEFAULT_SYMBOL_NAMES;
    use crate::interfaces::{CompositionOrder, OutputFormat};
    use crate::symbolic::{bindings_map, Binding};
    use std::io::{self, Write};

    const ROTATION_THEN_TRANSLATION: &str = "Matrix([[cos(theta), -sin(theta), px*cos(theta) - py*sin(theta)], [sin(theta), cos(theta), px*sin(theta) + py*cos(theta)], [0, 0, 1]])";
    const TRANSLATION_THEN_ROTATION: &str =
        "Matrix([[cos(theta), -sin(theta), px], [sin(theta), cos(theta), py], [0, 0, 1]])";

    fn composer() -> TransformComposer {
        TransformComposer::from_names(DEFAULT_SYMBOL_NAMES).unwrap()
    }

    fn report(format: OutputFormat) -> String {
        let mut out = Vec::new();
        composer().write_report(&mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_names() {
        let composer = composer();
        assert_eq!(composer.theta().name(), "theta");
        assert_eq!(composer.px().name(), "px");
        assert_eq!(composer.py().name(), "py");

        assert!(TransformComposer::from_names("theta px").is_err());
        assert!(TransformComposer::from_names("theta px py pz").is_err());
        assert!(TransformComposer::from_names("theta p-x py").is_err());
    }

    #[test]
    fn test_inline_report() {
        let expected = format!("{}\n{}\n", ROTATION_THEN_TRANSLATION, TRANSLATION_THEN_ROTATION);
        assert_eq!(report(OutputFormat::Inline), expected);
    }

    #[test]
    fn test_custom_symbol_names() {
        let composer = TransformComposer::from_names("a, u, v").unwrap();
        let product = composer.compose(CompositionOrder::RotationThenTranslation);
        assert_eq!(product[(0, 2)].to_string(), "u*cos(a) - v*sin(a)");
    }

    #[test]
    fn test_compose_order() {
        let composer = composer();
        assert_eq!(
            composer.compose(CompositionOrder::RotationThenTranslation),
            composer.rotation() * composer.translation()
        );
        assert_eq!(
            composer.compose(CompositionOrder::TranslationThenRotation),
            composer.translation() * composer.rotation()
        );
    }

    #[test]
    fn test_grid_report() {
        let text = report(OutputFormat::Grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rotation * translation =");
        assert_eq!(lines[4], "translation * rotation =");
        assert!(lines[1].contains("px*cos(theta) - py*sin(theta)"));
    }

    #[test]
    fn test_json_report() {
        let text = report(OutputFormat::Json);
        let blocks: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["product"], "rotation * translation");
        assert_eq!(blocks[0]["order"], "rotation_then_translation");
        assert_eq!(blocks[0]["evaluated"], false);
        assert_eq!(blocks[1]["rows"][1][2], "py");
    }

    #[test]
    fn test_evaluated_report() {
        let bindings: Vec<Binding> = ["theta=0", "px=2", "py=3"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        let mut out = Vec::new();
        composer()
            .write_evaluated_report(&mut out, &bindings_map(&bindings), OutputFormat::Inline)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "Matrix([[1, 0, 2], [0, 1, 3], [0, 0, 1]])";
        assert_eq!(text, format!("{}\n{}\n", expected, expected));
    }

    #[test]
    fn test_evaluated_report_missing_binding() {
        let bindings: Vec<Binding> = vec!["theta=1".parse().unwrap()];
        let mut out = Vec::new();
        let error = composer()
            .write_evaluated_report(&mut out, &bindings_map(&bindings), OutputFormat::Inline)
            .unwrap_err();
        assert!(format!("{:#}", error).contains("rotation * translation"));
    }

    #[test]
    fn test_reports_with_bindings() {
        let bindings: Vec<Binding> = ["theta=0", "px=2", "py=3"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        let mut out = Vec::new();
        composer()
            .write_reports(&mut out, OutputFormat::Inline, Some(&bindings_map(&bindings)))
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(format!("{}\n{}\n", lines[0], lines[1]), report(OutputFormat::Inline));
        assert_eq!(lines[3], "Matrix([[1, 0, 2], [0, 1, 3], [0, 0, 1]])");
    }

    #[test]
    fn test_reports_without_bindings_match_symbolic_report() {
        let mut out = Vec::new();
        composer()
            .write_reports(&mut out, OutputFormat::Grid, None)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report(OutputFormat::Grid));
    }

    #[test]
    fn test_missing_binding_writes_nothing() {
        let bindings: Vec<Binding> = vec!["theta=1".parse().unwrap(), "px=2".parse().unwrap()];
        let bindings = bindings_map(&bindings);

        let mut out = Vec::new();
        let error = composer()
            .write_reports(&mut out, OutputFormat::Inline, Some(&bindings))
            .unwrap_err();
        assert!(format!("{:#}", error).contains("py"));
        assert!(out.is_empty());

        let mut out = Vec::new();
        assert!(composer()
            .write_evaluated_report(&mut out, &bindings, OutputFormat::Json)
            .is_err());
        assert!(out.is_empty());
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let error = composer()
            .write_report(&mut ClosedOutput, OutputFormat::Inline)
            .unwrap_err();
        assert!(error.to_string().contains("Failed to write"));
    }
}
