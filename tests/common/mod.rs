use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub doc: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let doc = tmp.path().join("model_info_response.json");
        Self {
            _tmp: tmp,
            home,
            doc,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("minfo").expect("binary built");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn write_doc_utf8(&self, value: &Value) {
        let pretty = serde_json::to_string_pretty(value).expect("serialize fixture");
        fs::write(&self.doc, pretty).expect("write fixture");
    }

    /// Legacy server dumps are UTF-16LE with a BOM; reproduce that shape.
    pub fn write_doc_utf16(&self, value: &Value) {
        let pretty = serde_json::to_string_pretty(value).expect("serialize fixture");
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend(pretty.encode_utf16().flat_map(u16::to_le_bytes));
        fs::write(&self.doc, bytes).expect("write utf-16 fixture");
    }

    pub fn read_doc(&self) -> Value {
        let raw = fs::read_to_string(&self.doc).expect("read document as utf-8");
        serde_json::from_str(&raw).expect("valid json document")
    }

    pub fn doc_arg(&self) -> &str {
        self.doc.to_str().expect("doc path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--file")
            .arg(self.doc_arg())
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn fixture_document() -> Value {
    serde_json::json!({
        "0": {
            "name": "mortm-base",
            "tag": {
                "instruments": ["piano"],
                "genre": "jazz",
                "label": "メロディ"
            },
            "rule": {"gen_measure_count": false}
        },
        "1": {
            "name": "mortm-duet",
            "tag": {"instruments": ["piano", "sax"]}
        }
    })
}
