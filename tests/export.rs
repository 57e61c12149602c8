#[cfg(test)]
mod tests {
    use tasklist::libs::export::{ExportFormat, Exporter};
    use tasklist::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<Task>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                tasks: vec![
                    Task { id: Some(1), name: "Buy milk".into(), done: true },
                    Task { id: Some(2), name: "Buy eggs, large".into(), done: false },
                ],
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));

        assert_eq!(exporter.export(&ctx.tasks).unwrap(), 2);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "ID,Name,Done");
        assert_eq!(lines[1], "1,Buy milk,true");
        assert_eq!(lines[2], "2,\"Buy eggs, large\",false");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));

        exporter.export(&ctx.tasks).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["name"], "Buy milk");
        assert_eq!(items[0]["done"], true);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_list(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("empty.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));

        assert_eq!(exporter.export(&[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&output_path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("tasklist_export_"));
        assert!(name.ends_with(".json"));
    }
}
