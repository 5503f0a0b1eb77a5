use serde::{Deserialize, Serialize};

/// One supercategory and the class names under it.
/// The backend builds a two-level hierarchy, so children are leaf names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub name: String,
    pub children: Vec<String>,
}

/// Label metadata as the backend's metadata endpoint returns it.
/// The three fields always travel together; `SelectionStore::set_metadata`
/// swaps them in as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub hierarchy: Vec<HierarchyNode>,
    pub names: Vec<String>,
    #[serde(rename = "dataName")]
    pub data_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_metadata_response() {
        // Shape of a real metadata response: supercategory nodes, a flat name
        // list ending in "background", and the dataset display name.
        let raw = r#"{
            "hierarchy": [
                {"name": "vehicle", "children": ["car", "bus"]},
                {"name": "background", "children": ["background"]}
            ],
            "names": ["car", "bus", "background"],
            "dataName": "coco2017"
        }"#;

        let meta: Metadata = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.data_name, "coco2017");
        assert_eq!(meta.names, vec!["car", "bus", "background"]);
        assert_eq!(meta.hierarchy.len(), 2);
        assert_eq!(meta.hierarchy[0].name, "vehicle");
        assert_eq!(meta.hierarchy[0].children, vec!["car", "bus"]);
    }

    #[test]
    fn test_data_name_round_trips_with_wire_spelling() {
        let meta = Metadata {
            hierarchy: vec![],
            names: vec![],
            data_name: "kitti".to_string(),
        };
        let value = serde_json::to_value(&meta).unwrap();
        // The backend spells it dataName; the Rust field stays snake_case.
        assert_eq!(value["dataName"], "kitti");
        assert!(value.get("data_name").is_none());
    }
}
