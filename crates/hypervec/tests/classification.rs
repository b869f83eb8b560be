//! End-to-End Classification Tests
//!
//! Exercises the full pipeline: item memories, record encoding, prototype
//! training, retraining, prediction, and persistence working together the
//! way an application driver would use them.

use hypervec::{
    encode_record, evaluate, quantize, AssociativeMemory, BinaryVector, ContinuousItemMemory,
    ItemMemory, NumericVector, RetrainOptions, Trainer,
};
use tempfile::tempdir;

/// Copy of `proto` with a 64-bit block inverted at `offset`
fn perturbed(proto: &BinaryVector, offset: usize) -> BinaryVector {
    let mut v = proto.clone();
    v.invert_range(offset, 64);
    v
}

// ============================================================================
// Prototype Training Pipeline
// ============================================================================

mod prototype_pipeline_tests {
    use super::*;

    /// Five samples per class, each a different disjoint 64-bit block of the
    /// class prototype inverted. Any bit is flipped in at most one sample,
    /// so the majority bundle reconstructs the prototype exactly.
    fn labeled_samples() -> (Vec<BinaryVector>, Vec<usize>, BinaryVector, BinaryVector) {
        let proto0 = BinaryVector::from_seed(1024, 100);
        let proto1 = BinaryVector::from_seed(1024, 200);

        let mut samples = Vec::new();
        let mut labels = Vec::new();
        for k in 0..5 {
            samples.push(perturbed(&proto0, k * 64));
            labels.push(0);
            samples.push(perturbed(&proto1, k * 64));
            labels.push(1);
        }

        (samples, labels, proto0, proto1)
    }

    #[test]
    fn test_bundled_prototypes_recover_their_class_centers() {
        let (samples, labels, proto0, proto1) = labeled_samples();

        let trainer = Trainer::from_labeled(&samples, &labels).unwrap();
        let am = trainer.build_am().unwrap();

        assert_eq!(am.len(), 2);
        assert_eq!(am.at(0).unwrap(), &proto0);
        assert_eq!(am.at(1).unwrap(), &proto1);
    }

    #[test]
    fn test_training_set_classifies_perfectly() {
        let (samples, labels, _, _) = labeled_samples();

        let trainer = Trainer::from_labeled(&samples, &labels).unwrap();
        let am = trainer.build_am().unwrap();

        assert_eq!(evaluate(&am, &samples, &labels).unwrap(), 1.0);
    }

    #[test]
    fn test_noisy_queries_classify_correctly() {
        let (samples, labels, proto0, proto1) = labeled_samples();

        let trainer = Trainer::from_labeled(&samples, &labels).unwrap();
        let am = trainer.build_am().unwrap();

        // Perturbations the trainer never saw
        assert_eq!(am.search(&perturbed(&proto0, 500)).unwrap(), 0);
        assert_eq!(am.search(&perturbed(&proto1, 700)).unwrap(), 1);
    }

    #[test]
    fn test_retrain_on_clean_samples_keeps_prototypes() {
        let (samples, labels, proto0, _) = labeled_samples();

        let mut trainer = Trainer::from_labeled(&samples, &labels).unwrap();
        let mut am = trainer.build_am().unwrap();

        let held_out = [perturbed(&proto0, 320)];
        let held_out_labels = [0];

        let options = RetrainOptions { iterations: 2 };
        let history = trainer
            .retrain(
                &mut am,
                &samples,
                &labels,
                Some((&held_out, &held_out_labels)),
                &options,
            )
            .unwrap();

        assert_eq!(history.len(), 2);
        for record in &history {
            assert_eq!(record.train_accuracy, 1.0);
            assert_eq!(record.test_accuracy, Some(1.0));
        }

        // No misses means no bucket growth and unchanged prototypes
        assert_eq!(trainer.examples(0).unwrap().len(), 5);
        assert_eq!(trainer.examples(1).unwrap().len(), 5);
        assert_eq!(am.at(0).unwrap(), &proto0);
    }
}

// ============================================================================
// Persistence
// ============================================================================

mod persistence_tests {
    use super::*;

    #[test]
    fn test_associative_memory_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("am.txt");

        let proto0 = BinaryVector::from_seed(1024, 100);
        let proto1 = BinaryVector::from_seed(1024, 200);
        let am = AssociativeMemory::from_prototypes(vec![proto0.clone(), proto1.clone()]);
        am.save(&path).unwrap();

        let loaded: AssociativeMemory<BinaryVector> = AssociativeMemory::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.at(0).unwrap(), &proto0);
        assert_eq!(loaded.at(1).unwrap(), &proto1);

        let query = perturbed(&proto1, 128);
        assert_eq!(loaded.search(&query).unwrap(), am.search(&query).unwrap());
    }

    #[test]
    fn test_item_memories_reload_for_later_sessions() {
        let dir = tempdir().unwrap();
        let im_path = dir.path().join("im.txt");
        let cim_path = dir.path().join("cim.txt");

        let im: ItemMemory<BinaryVector> = ItemMemory::with_seed(8, 2048, 31);
        let cim: ContinuousItemMemory<BinaryVector> =
            ContinuousItemMemory::with_seed(16, 2048, 37).unwrap();
        im.save(&im_path).unwrap();
        cim.save(&cim_path).unwrap();

        let im2: ItemMemory<BinaryVector> = ItemMemory::load(&im_path).unwrap();
        let cim2: ContinuousItemMemory<BinaryVector> =
            ContinuousItemMemory::load(&cim_path).unwrap();

        // Encoding with the reloaded memories reproduces the original records
        let levels = [0, 1, 0, 2, 1, 0, 1, 2];
        let original = encode_record(&im, &cim, &levels).unwrap();
        let reloaded = encode_record(&im2, &cim2, &levels).unwrap();
        assert_eq!(original, reloaded);
    }
}

// ============================================================================
// Record Encoding Pipeline
// ============================================================================

mod encoding_pipeline_tests {
    use super::*;

    fn memories() -> (ItemMemory<BinaryVector>, ContinuousItemMemory<BinaryVector>) {
        let im = ItemMemory::with_seed(8, 2048, 31);
        let cim = ContinuousItemMemory::with_seed(16, 2048, 37).unwrap();
        (im, cim)
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let (im, cim) = memories();
        let levels = [0, 1, 0, 2, 1, 0, 1, 2];

        let a = encode_record(&im, &cim, &levels).unwrap();
        let b = encode_record(&im, &cim, &levels).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_level_gradient_survives_encoding() {
        let (im, cim) = memories();

        let low = [0, 1, 0, 2, 1, 0, 1, 2];
        let low_jitter = [1, 1, 1, 2, 0, 0, 2, 2];
        let high = [13, 15, 14, 13, 15, 14, 13, 15];

        let rec_low = encode_record(&im, &cim, &low).unwrap();
        let rec_jitter = encode_record(&im, &cim, &low_jitter).unwrap();
        let rec_high = encode_record(&im, &cim, &high).unwrap();

        let d_near = rec_low.distance(&rec_jitter).unwrap();
        let d_far = rec_low.distance(&rec_high).unwrap();
        assert!(
            d_near < d_far,
            "jittered record should stay closer: {} vs {}",
            d_near,
            d_far
        );
    }

    #[test]
    fn test_encoded_records_classify_by_level_pattern() {
        let (im, cim) = memories();

        let low = [0, 1, 0, 2, 1, 0, 1, 2];
        let high = [13, 15, 14, 13, 15, 14, 13, 15];
        let am = AssociativeMemory::from_prototypes(vec![
            encode_record(&im, &cim, &low).unwrap(),
            encode_record(&im, &cim, &high).unwrap(),
        ]);

        let low_query = encode_record(&im, &cim, &[1, 1, 1, 2, 0, 0, 2, 2]).unwrap();
        let high_query = encode_record(&im, &cim, &[14, 15, 13, 13, 14, 14, 12, 15]).unwrap();

        assert_eq!(am.search(&low_query).unwrap(), 0);
        assert_eq!(am.search(&high_query).unwrap(), 1);
    }

    #[test]
    fn test_quantized_readings_feed_the_encoder() {
        let (im, cim) = memories();

        // Sensor-style readings in [0, 20] quantized onto the 16 CIM levels
        let calm: Vec<f32> = vec![0.5, 1.5, 0.8, 2.6, 1.9, 0.2, 1.1, 2.9];
        let active: Vec<f32> = vec![17.2, 19.8, 18.1, 17.5, 19.9, 18.4, 17.0, 19.5];

        let to_levels = |readings: &[f32]| -> Vec<usize> {
            readings
                .iter()
                .map(|&r| quantize(r, 0.0, 20.0, 16).unwrap())
                .collect()
        };

        let am = AssociativeMemory::from_prototypes(vec![
            encode_record(&im, &cim, &to_levels(&calm)).unwrap(),
            encode_record(&im, &cim, &to_levels(&active)).unwrap(),
        ]);

        let calm_query: Vec<f32> = vec![0.9, 1.2, 1.4, 2.2, 1.5, 0.6, 1.8, 2.4];
        let active_query: Vec<f32> = vec![18.0, 19.1, 17.6, 18.3, 19.4, 17.9, 17.3, 19.0];

        let q0 = encode_record(&im, &cim, &to_levels(&calm_query)).unwrap();
        let q1 = encode_record(&im, &cim, &to_levels(&active_query)).unwrap();
        assert_eq!(am.search(&q0).unwrap(), 0);
        assert_eq!(am.search(&q1).unwrap(), 1);
    }
}

// ============================================================================
// Numeric Vector Pipeline
// ============================================================================

mod numeric_pipeline_tests {
    use super::*;

    fn perturbed_numeric(proto: &NumericVector<f32>, offset: usize) -> NumericVector<f32> {
        let mut v = proto.clone();
        v.invert_range(offset, 64);
        v
    }

    #[test]
    fn test_bipolar_prototypes_classify_noisy_samples() {
        let proto0: NumericVector<f32> = NumericVector::from_seed(1024, 100);
        let proto1: NumericVector<f32> = NumericVector::from_seed(1024, 200);

        let mut samples = Vec::new();
        let mut labels = Vec::new();
        for k in 0..4 {
            samples.push(perturbed_numeric(&proto0, k * 64));
            labels.push(0);
            samples.push(perturbed_numeric(&proto1, k * 64));
            labels.push(1);
        }

        let trainer = Trainer::from_labeled(&samples, &labels).unwrap();
        let am = trainer.build_am().unwrap();

        assert_eq!(evaluate(&am, &samples, &labels).unwrap(), 1.0);
        assert_eq!(am.search(&perturbed_numeric(&proto0, 512)).unwrap(), 0);
        assert_eq!(am.search(&perturbed_numeric(&proto1, 640)).unwrap(), 1);
    }
}
