//! Kernelspecs API wire models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The `kernel.json` payload inside a kernelspec.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct KernelSpecFile {
    pub display_name: String,
    pub language: String,
    #[serde(default)]
    pub argv: Vec<String>,
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub interrupt_mode: Option<String>,
}

/// One kernelspec as served by `GET /api/kernelspecs`.
///
/// `resources` maps resource names (`logo-64x64`, `kernel.js`, ...) to
/// URLs the backend serves them from.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct KernelSpec {
    pub name: String,
    pub spec: KernelSpecFile,
    #[serde(default)]
    pub resources: HashMap<String, String>,
}

impl KernelSpec {
    /// URL of the launcher-sized logo, when the spec ships one.
    pub fn logo_url(&self) -> Option<&str> {
        self.resources.get("logo-64x64").map(String::as_str)
    }
}

/// Response shape of `GET /api/kernelspecs`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KernelSpecsResponse {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub kernelspecs: HashMap<String, KernelSpec>,
}

impl KernelSpecsResponse {
    /// Specs sorted by key for stable rendering.
    pub fn sorted(&self) -> Vec<KernelSpec> {
        let mut keys: Vec<&String> = self.kernelspecs.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|k| self.kernelspecs[k].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "default": "python3",
        "kernelspecs": {
            "python3": {
                "name": "python3",
                "spec": {
                    "display_name": "Python 3 (ipykernel)",
                    "language": "python",
                    "argv": ["python", "-m", "ipykernel_launcher", "-f", "{connection_file}"]
                },
                "resources": {
                    "logo-64x64": "http://localhost:8888/kernelspecs/python3/logo-64x64.png"
                }
            },
            "ir": {
                "name": "ir",
                "spec": {"display_name": "R", "language": "R"},
                "resources": {}
            }
        }
    }"#;

    #[test]
    fn test_parse_kernelspecs_response() {
        let resp: KernelSpecsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.default.as_deref(), Some("python3"));
        assert_eq!(resp.kernelspecs.len(), 2);

        let py = &resp.kernelspecs["python3"];
        assert_eq!(py.spec.language, "python");
        assert_eq!(py.spec.argv.len(), 5);
        assert!(py.logo_url().unwrap().ends_with("logo-64x64.png"));
        assert!(resp.kernelspecs["ir"].logo_url().is_none());
    }

    #[test]
    fn test_sorted_is_stable_by_key() {
        let resp: KernelSpecsResponse = serde_json::from_str(SAMPLE).unwrap();
        let sorted = resp.sorted();
        assert_eq!(sorted[0].name, "ir");
        assert_eq!(sorted[1].name, "python3");
    }
}
