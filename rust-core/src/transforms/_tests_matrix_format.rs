#[cfg(test)]
mod tests {
    use super::super::homogeneous2d::{build_rotation, build_translation, multiply};
    use super::super::matrix_format::*;
    use crate::interfaces::OutputFormat;
    use crate::symbolic::symbols;
    use nalgebra::Matrix3;

    #[test]
    fn test_inline_rotation() {
        let s = symbols("theta").unwrap();
        let rotation = build_rotation(&s[0]);
        assert_eq!(
            format_inline(&rotation),
            "Matrix([[cos(theta), -sin(theta), 0], [sin(theta), cos(theta), 0], [0, 0, 1]])"
        );
    }

    #[test]
    fn test_inline_translation() {
        let s = symbols("px py").unwrap();
        let translation = build_translation(&s[0], &s[1]);
        assert_eq!(
            format_inline(&translation),
            "Matrix([[1, 0, px], [0, 1, py], [0, 0, 1]])"
        );
    }

    #[test]
    fn test_inline_numeric() {
        let matrix = Matrix3::new(1.0, -0.5, 2.0, 0.5, 1.0, 3.0, 0.0, 0.0, 1.0);
        assert_eq!(
            format_inline(&matrix),
            "Matrix([[1, -0.5, 2], [0.5, 1, 3], [0, 0, 1]])"
        );
    }

    #[test]
    fn test_grid_alignment() {
        let s = symbols("theta px py").unwrap();
        let product = multiply(&build_translation(&s[1], &s[2]), &build_rotation(&s[0]));
        let grid = format_grid(&product);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[cos(theta), -sin(theta), px]");
        assert_eq!(lines[1], "[sin(theta), cos(theta),  py]");
        assert!(lines[2].starts_with("[0,"));
        assert!(lines[2].ends_with("1 ]"));
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }

    #[test]
    fn test_json_rows() {
        let s = symbols("px py").unwrap();
        let translation = build_translation(&s[0], &s[1]);
        let json = format_json(&translation).unwrap();
        let rows: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows, entries(&translation));
        assert_eq!(rows[0], vec!["1", "0", "px"]);
    }

    #[test]
    fn test_format_matrix_dispatch() {
        let s = symbols("theta").unwrap();
        let rotation = build_rotation(&s[0]);
        assert_eq!(
            format_matrix(&rotation, OutputFormat::Inline).unwrap(),
            format_inline(&rotation)
        );
        assert_eq!(
            format_matrix(&rotation, OutputFormat::Grid).unwrap(),
            format_grid(&rotation)
        );
        assert_eq!(
            format_matrix(&rotation, OutputFormat::Json).unwrap(),
            format_json(&rotation).unwrap()
        );
    }
}
