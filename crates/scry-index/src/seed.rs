use crate::db::{Database, DocumentRecord};
use crate::error::{Error, Result};
use crate::schema::field_paths;
use sha2::{Digest, Sha256};

// The seed corpus ships inside the binary: an SBOM component listing and a
// nested CVE advisory. Components are indexed one document per component;
// the advisory is flattened to a searchable summary that keeps the full
// nested source under `original`.
const COMPONENTS_SEED: &str = include_str!("../data/components.json");
const CVE_SEED: &str = include_str!("../data/cve.json");

#[derive(Debug, Clone, Copy)]
pub struct RebuildReport {
    pub documents: usize,
    pub schema_fields: usize,
}

/// Resets the index and repopulates it from the embedded seed corpus,
/// refreshing the derived schema row.
pub fn rebuild(db: &Database) -> Result<RebuildReport> {
    db.reset()?;

    let indexed_at = chrono::Utc::now().to_rfc3339();
    let mut all_docs: Vec<serde_json::Value> = Vec::new();

    let sbom: serde_json::Value = serde_json::from_str(COMPONENTS_SEED)?;
    let components = sbom
        .get("components")
        .and_then(|c| c.as_array())
        .ok_or_else(|| Error::Seed("component seed has no components array".to_string()))?;
    for component in components {
        let mut doc = component.clone();
        if let Some(entries) = doc.as_object_mut() {
            entries.insert(
                "type".to_string(),
                serde_json::Value::String("component".to_string()),
            );
        }
        let id = component_id(&doc);
        insert_doc(db, &id, "component", &doc, &indexed_at)?;
        all_docs.push(doc);
    }

    let advisory: serde_json::Value = serde_json::from_str(CVE_SEED)?;
    let flat = flatten_cve(&advisory);
    let id = flat
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("CVE-UNKNOWN")
        .to_string();
    insert_doc(db, &id, "cve", &flat, &indexed_at)?;
    all_docs.push(flat);

    let fields = field_paths(all_docs.iter());
    db.update_schema(&fields, all_docs.len())?;

    Ok(RebuildReport {
        documents: all_docs.len(),
        schema_fields: fields.len(),
    })
}

fn insert_doc(
    db: &Database,
    id: &str,
    doc_type: &str,
    doc: &serde_json::Value,
    indexed_at: &str,
) -> Result<()> {
    db.insert_document(&DocumentRecord {
        id: id.to_string(),
        doc_type: doc_type.to_string(),
        body: serde_json::to_string(doc)?,
        indexed_at: Some(indexed_at.to_string()),
    })
}

/// Document id for a component: its `sbom_id`, else its package name, else a
/// content hash.
fn component_id(doc: &serde_json::Value) -> String {
    if let Some(id) = doc.get("sbom_id").and_then(|v| v.as_str()) {
        return id.to_string();
    }
    if let Some(name) = doc
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|v| v.as_str())
    {
        return name.to_string();
    }
    let serialized = doc.to_string();
    let digest = Sha256::digest(serialized.as_bytes());
    format!("{digest:x}")
}

/// Flattens a nested advisory into the indexed shape: id, description, and
/// affected packages pulled up front, the full source kept under `original`.
pub fn flatten_cve(advisory: &serde_json::Value) -> serde_json::Value {
    let osv = &advisory["cve"]["osv"];
    let kev = &advisory["cve"]["kev"];

    let id = osv
        .get("id")
        .and_then(|v| v.as_str())
        .or_else(|| kev.get("cveID").and_then(|v| v.as_str()))
        .unwrap_or("CVE-UNKNOWN");
    let description = osv
        .get("details")
        .and_then(|v| v.as_str())
        .or_else(|| kev.get("shortDescription").and_then(|v| v.as_str()));

    let mut packages = Vec::new();
    if let Some(affected) = osv.get("affected").and_then(|a| a.as_array()) {
        for entry in affected {
            if let Some(package) = entry.get("package").filter(|p| p.is_object()) {
                packages.push(serde_json::json!({
                    "ecosystem": package.get("ecosystem").cloned().unwrap_or(serde_json::Value::Null),
                    "name": package.get("name").cloned().unwrap_or(serde_json::Value::Null),
                    "purl": package.get("purl").cloned().unwrap_or(serde_json::Value::Null),
                }));
            }
        }
    }

    serde_json::json!({
        "id": id,
        "type": "cve",
        "description": description,
        "affected_packages": packages,
        "original": advisory.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_id_prefers_sbom_id_then_package_name() {
        let with_sbom_id = serde_json::json!({"sbom_id": "pkg-x", "package": {"name": "x"}});
        assert_eq!(component_id(&with_sbom_id), "pkg-x");

        let with_name = serde_json::json!({"package": {"name": "x"}});
        assert_eq!(component_id(&with_name), "x");

        let bare = serde_json::json!({"package": {"friendly_name": "X"}});
        let id = component_id(&bare);
        assert_eq!(id.len(), 64);
        assert_eq!(component_id(&bare), id);
    }

    #[test]
    fn flatten_cve_pulls_id_description_and_packages_forward() {
        let advisory = serde_json::json!({
            "cve": {
                "osv": {
                    "id": "CVE-2020-1472",
                    "details": "Netlogon elevation of privilege.",
                    "affected": [
                        {"package": {"ecosystem": "Windows", "name": "netlogon", "purl": null}}
                    ]
                },
                "kev": {"cveID": "CVE-2020-1472", "shortDescription": "Zerologon."}
            }
        });

        let flat = flatten_cve(&advisory);
        assert_eq!(flat["id"], "CVE-2020-1472");
        assert_eq!(flat["type"], "cve");
        assert_eq!(flat["description"], "Netlogon elevation of privilege.");
        assert_eq!(flat["affected_packages"][0]["name"], "netlogon");
        assert_eq!(flat["original"]["cve"]["kev"]["shortDescription"], "Zerologon.");
    }

    #[test]
    fn flatten_cve_falls_back_to_kev_fields() {
        let advisory = serde_json::json!({
            "cve": {
                "osv": {},
                "kev": {"cveID": "CVE-2019-0708", "shortDescription": "BlueKeep."}
            }
        });

        let flat = flatten_cve(&advisory);
        assert_eq!(flat["id"], "CVE-2019-0708");
        assert_eq!(flat["description"], "BlueKeep.");
        assert_eq!(flat["affected_packages"].as_array().unwrap().len(), 0);
    }
}
