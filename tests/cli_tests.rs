use regex::Regex;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    data_path: PathBuf,
}

impl TestContext {
    /// Rows with segments that carry no icon, so rendering never touches the network.
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("sales.csv");

        let mut f = File::create(&data_path).unwrap();
        writeln!(f, "Segment,Country,Product,Discount Band,Units Sold,Sales").unwrap();
        writeln!(f, "Retail,USA,Widget,5%,10,1500").unwrap();
        writeln!(f, "Retail,USA,Widget,5%,10,1500").unwrap();
        writeln!(f, "Education,UK,Gadget,0%,3,99.5").unwrap();
        writeln!(f, "Other,Canada,Gizmo,10%,7,12000").unwrap();

        Self { dir, data_path }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_cardforge"))
            .current_dir(self.dir.path())
            .args(args)
            .output()
            .expect("Failed to execute cardforge")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_inspect_sample_layout() {
    let ctx = TestContext::new();
    let output = ctx.run(&["inspect"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    let re = Regex::new(r"Cards: (\d+) \| Grid: (\d+) x (\d+) \| Hidden cells: (\d+)").unwrap();
    let caps = re.captures(&text).expect("layout summary line");
    assert_eq!(&caps[1], "9");
    assert_eq!(&caps[2], "2");
    assert_eq!(&caps[3], "5");
    assert_eq!(&caps[4], "1");

    assert!(text.contains("Product I"));
    // Government: 10000 + 25000 + 22000
    assert!(text.contains("$57,000.00"));
    assert!(!ctx.dir.path().join("business_cards.png").exists());
}

#[test]
fn test_inspect_custom_data_and_columns() {
    let ctx = TestContext::new();
    let data = ctx.data_path.to_str().unwrap();
    let output = ctx.run(&["inspect", "--data", data, "--max-per-row", "2"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Cards: 3 | Grid: 2 x 2 | Hidden cells: 1"), "{}", text);
}

#[test]
fn test_render_offline_dataset() {
    let ctx = TestContext::new();
    let data = ctx.data_path.to_str().unwrap();
    let output = ctx.run(&[
        "render",
        "--data",
        data,
        "--no-show",
        "-o",
        "cards.png",
        "--manifest",
        "cards.json",
    ]);
    assert!(output.status.success(), "stdout: {}", stdout(&output));

    let text = stdout(&output);
    let re = Regex::new(r"Rendered (\d+) cards \((\d+) with icons\)").unwrap();
    let caps = re.captures(&text).expect("render summary line");
    assert_eq!(&caps[1], "3");
    assert_eq!(&caps[2], "0");

    let png = fs::read(ctx.dir.path().join("cards.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ctx.dir.path().join("cards.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["rows"], 1);
    assert_eq!(manifest["hidden_cells"], serde_json::json!({"start": 3, "end": 5}));
}

#[test]
fn test_huge_column_count_stays_bounded() {
    let ctx = TestContext::new();
    let output = ctx.run(&["inspect", "--max-per-row", "100000000"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Cards: 9 | Grid: 1 x 100000000 | Hidden cells: 99999991"));

    let data = ctx.data_path.to_str().unwrap();
    let output = ctx.run(&[
        "render",
        "--data",
        data,
        "--no-show",
        "--max-per-row",
        "100000000",
        "-o",
        "wide.png",
        "--manifest",
        "wide.json",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ctx.dir.path().join("wide.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["columns"], 100_000_000);
    assert_eq!(
        manifest["hidden_cells"],
        serde_json::json!({"start": 3, "end": 100_000_000})
    );
}

#[test]
fn test_zero_columns_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["inspect", "--max-per-row", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_data_file_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["inspect", "--data", "does_not_exist.csv"]);
    assert!(!output.status.success());
}
