//! Fixed aggregation pipelines run over the whole products collection

use mongodb::bson::{Document, doc};

/// Project every product down to `name`, `tags`, `noOfSales` and
/// `averageRating`, dropping `_id` and all other fields.
pub fn projection() -> Vec<Document> {
    vec![doc! {
        "$project": {
            "_id": 0,
            "name": 1,
            "tags": 1,
            "noOfSales": "$metrics.totalQuantitySold",
            "averageRating": "$metrics.avgRating",
        }
    }]
}

/// Count occurrences of every tag across all products, most frequent first.
///
/// A tag listed twice on one product counts twice. Equal counts are ordered
/// by tag value ascending.
pub fn tag_frequency() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$tags" },
        doc! {
            "$group": {
                "_id": "$tags",
                "count": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "count": -1, "_id": 1 } },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_single_project_stage() {
        let stages = projection();
        assert_eq!(stages.len(), 1);

        let project = stages[0].get_document("$project").unwrap();
        assert_eq!(project.get_i32("_id").unwrap(), 0);
        assert_eq!(project.get_i32("name").unwrap(), 1);
        assert_eq!(project.get_i32("tags").unwrap(), 1);
        assert_eq!(
            project.get_str("noOfSales").unwrap(),
            "$metrics.totalQuantitySold"
        );
        assert_eq!(project.get_str("averageRating").unwrap(), "$metrics.avgRating");
        assert_eq!(project.len(), 5);
    }

    #[test]
    fn test_tag_frequency_stage_order() {
        let stages = tag_frequency();
        let names: Vec<&str> = stages
            .iter()
            .map(|stage| stage.keys().next().map(String::as_str).unwrap_or_default())
            .collect();

        assert_eq!(names, vec!["$unwind", "$group", "$sort"]);
        assert_eq!(stages[0].get_str("$unwind").unwrap(), "$tags");
    }

    #[test]
    fn test_tag_frequency_sorts_by_count_then_tag() {
        let stages = tag_frequency();
        let sort = stages[2].get_document("$sort").unwrap();
        let keys: Vec<&String> = sort.keys().collect();

        assert_eq!(keys, vec!["count", "_id"]);
        assert_eq!(sort.get_i32("count").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), 1);
    }

    #[test]
    fn test_tag_frequency_groups_by_tag_value() {
        let stages = tag_frequency();
        let group = stages[1].get_document("$group").unwrap();

        assert_eq!(group.get_str("_id").unwrap(), "$tags");
        assert_eq!(group.get_document("count").unwrap(), &doc! { "$sum": 1 });
    }
}
