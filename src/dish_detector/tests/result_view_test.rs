#[cfg(test)]
mod result_view_test {
    use crate::dish_classifier::interface::{ClassPrediction, PredictionResult};
    use crate::dish_detector::labels::{DEFAULT_STYLE, DISH_NAMES, DISH_STYLES};
    use crate::dish_detector::result_view::{
        format_confidence, map_prediction, parse_class_id, MappingError, UNKNOWN_DISH,
    };
    use crate::dish_detector::tests::fixture::sample_prediction;

    fn single(class: &str, confidence: f64) -> PredictionResult {
        PredictionResult {
            predicted_class: class.to_string(),
            top_4_predictions: vec![ClassPrediction {
                class: class.to_string(),
                confidence,
            }],
        }
    }

    #[test]
    fn test_every_known_class_maps_to_its_name() {
        for (class_id, name) in DISH_NAMES.iter().enumerate() {
            let view = map_prediction(&single(&format!("class_{}", class_id), 0.5)).unwrap();

            assert_eq!(view.primary_class_id, class_id);
            assert_eq!(view.primary_name, *name);
            assert_eq!(view.rows[0].name, *name);
            assert_eq!(view.rows[0].style, DISH_STYLES[class_id]);
        }
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.8765), "87.65%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(0.05), "5.00%");
    }

    #[test]
    fn test_format_confidence_rounds_ties_away_from_zero() {
        assert_eq!(format_confidence(0.87625), "87.63%");
    }

    #[test]
    fn test_format_confidence_negative_zero() {
        assert_eq!(format_confidence(-0.0), "0.00%");
    }

    #[test]
    fn test_out_of_range_class_falls_back() {
        let view = map_prediction(&single("class_26", 0.3)).unwrap();

        assert_eq!(view.primary_class_id, 26);
        assert_eq!(view.primary_name, UNKNOWN_DISH);
        assert_eq!(view.rows[0].style, DEFAULT_STYLE);
        assert_eq!(view.rows[0].name, UNKNOWN_DISH);
        assert_eq!(view.rows[0].confidence_text, "30.00%");
    }

    #[test]
    fn test_parse_class_id() {
        assert_eq!(parse_class_id("class_0"), Ok(0));
        assert_eq!(parse_class_id("class_25"), Ok(25));
        assert_eq!(parse_class_id("class_007"), Ok(7));
        assert_eq!(
            parse_class_id("class_x"),
            Err(MappingError::InvalidClassId("class_x".to_string()))
        );
        assert!(parse_class_id("3").is_err());
        assert!(parse_class_id("class_-1").is_err());
        assert!(parse_class_id("").is_err());
    }

    #[test]
    fn test_invalid_secondary_class_fails_whole_mapping() {
        let mut result = sample_prediction();
        result.top_4_predictions[2].class = "dessert".to_string();

        assert_eq!(
            map_prediction(&result),
            Err(MappingError::InvalidClassId("dessert".to_string()))
        );
    }

    #[test]
    fn test_rows_keep_service_order() {
        let result = PredictionResult {
            predicted_class: "class_5".to_string(),
            top_4_predictions: vec![
                ClassPrediction {
                    class: "class_1".to_string(),
                    confidence: 0.1,
                },
                ClassPrediction {
                    class: "class_5".to_string(),
                    confidence: 0.7,
                },
            ],
        };

        let view = map_prediction(&result).unwrap();

        let ids: Vec<usize> = view.rows.iter().map(|r| r.class_id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(view.primary_name, "Cookies");
    }

    #[test]
    fn test_empty_predictions_map_to_no_rows() {
        let result = PredictionResult {
            predicted_class: "class_19".to_string(),
            top_4_predictions: vec![],
        };

        let view = map_prediction(&result).unwrap();

        assert_eq!(view.primary_name, "Pizza");
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_bar_fraction_is_clamped() {
        assert_eq!(
            map_prediction(&single("class_1", 1.4)).unwrap().rows[0].bar_fraction,
            1.0
        );
        assert_eq!(
            map_prediction(&single("class_1", -0.2)).unwrap().rows[0].bar_fraction,
            0.0
        );
        assert_eq!(
            map_prediction(&single("class_1", 0.25)).unwrap().rows[0].bar_fraction,
            0.25
        );
    }

    #[test]
    fn test_sample_response_mapping() {
        let view = map_prediction(&sample_prediction()).unwrap();

        assert_eq!(view.primary_name, "Chicken Fry");
        let rows: Vec<(&str, &str)> = view
            .rows
            .iter()
            .map(|r| (r.name.as_str(), r.confidence_text.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Chicken Fry", "92.00%"),
                ("Dry Pepper Chicken", "5.00%"),
                ("Biryani", "2.00%"),
                ("Pizza", "1.00%"),
            ]
        );
    }
}
