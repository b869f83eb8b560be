//! Class-prototype training and iterative retraining
//!
//! A [`Trainer`] collects encoded samples into per-class buckets and bundles
//! each bucket into a class prototype. [`Trainer::retrain`] then runs the
//! perceptron-style refinement loop: every misclassified sample is appended
//! to its true class bucket, its inversion is appended to the wrongly
//! predicted class bucket, and the prototypes are rebuilt from the grown
//! buckets after each pass.

use crate::error::{HdcError, Result};
use crate::memory::AssociativeMemory;
use crate::ops;
use crate::vector::Hypervector;
use serde::{Deserialize, Serialize};

/// Knobs for the retraining loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrainOptions {
    /// Number of full passes over the training samples
    pub iterations: usize,
}

impl Default for RetrainOptions {
    fn default() -> Self {
        Self { iterations: 20 }
    }
}

/// Accuracy record for one retraining pass
///
/// `train_accuracy` is measured with the prototypes the pass started from;
/// `test_accuracy` is measured with the rebuilt prototypes, when a test set
/// was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrainIteration {
    /// Zero-based pass number
    pub iteration: usize,
    /// Fraction of training samples classified correctly during the pass
    pub train_accuracy: f32,
    /// Accuracy on the held-out set after the rebuild, when one was given
    pub test_accuracy: Option<f32>,
}

/// Per-class sample buckets from which class prototypes are bundled
#[derive(Clone, Debug)]
pub struct Trainer<V> {
    classes: Vec<Vec<V>>,
}

impl<V: Hypervector> Trainer<V> {
    /// Creates a trainer with `num_classes` empty buckets
    pub fn new(num_classes: usize) -> Self {
        Self {
            classes: vec![Vec::new(); num_classes],
        }
    }

    /// Builds a trainer from parallel sample/label slices
    ///
    /// The number of classes becomes the highest label plus one.
    pub fn from_labeled(samples: &[V], labels: &[usize]) -> Result<Self> {
        if samples.len() != labels.len() {
            return Err(HdcError::InvalidParameter(format!(
                "got {} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }

        let num_classes = labels.iter().map(|&l| l + 1).max().unwrap_or(0);
        let mut trainer = Self::new(num_classes);
        for (sample, &label) in samples.iter().zip(labels) {
            trainer.add_example(label, sample.clone());
        }

        Ok(trainer)
    }

    /// Appends one sample to the bucket for `label`, growing the class
    /// count if needed
    pub fn add_example(&mut self, label: usize, sample: V) {
        if label >= self.classes.len() {
            self.classes.resize_with(label + 1, Vec::new);
        }
        self.classes[label].push(sample);
    }

    /// Number of class buckets
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Returns the samples collected for `label`
    pub fn examples(&self, label: usize) -> Result<&[V]> {
        self.classes
            .get(label)
            .map(Vec::as_slice)
            .ok_or(HdcError::IndexOutOfBounds {
                index: label,
                len: self.classes.len(),
            })
    }

    /// Bundles every class bucket into a prototype memory
    ///
    /// Prototype `i` is the bundle of bucket `i`; a class with no samples
    /// cannot be bundled and fails with [`HdcError::EmptyClass`].
    pub fn build_am(&self) -> Result<AssociativeMemory<V>> {
        let mut am = AssociativeMemory::new();
        for (label, bucket) in self.classes.iter().enumerate() {
            if bucket.is_empty() {
                return Err(HdcError::EmptyClass { label });
            }
            am.push(V::bundle(bucket)?);
        }

        tracing::debug!("Built associative memory with {} class prototypes", am.len());
        Ok(am)
    }

    /// Runs `options.iterations` retraining passes over the samples
    ///
    /// Each pass classifies every sample against the current prototypes.
    /// A miss appends the sample to its labeled bucket and the sample's
    /// inversion to the predicted bucket; the prototypes in `am` are rebuilt
    /// from the grown buckets at the end of the pass. Returns one accuracy
    /// record per pass.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::{BinaryVector, RetrainOptions, Trainer};
    ///
    /// let samples: Vec<_> = (0..6).map(|i| BinaryVector::from_seed(1024, i)).collect();
    /// let labels = vec![0, 0, 0, 1, 1, 1];
    ///
    /// let mut trainer = Trainer::from_labeled(&samples, &labels).unwrap();
    /// let mut am = trainer.build_am().unwrap();
    ///
    /// let options = RetrainOptions { iterations: 2 };
    /// let history = trainer
    ///     .retrain(&mut am, &samples, &labels, None, &options)
    ///     .unwrap();
    /// assert_eq!(history.len(), 2);
    /// ```
    pub fn retrain(
        &mut self,
        am: &mut AssociativeMemory<V>,
        samples: &[V],
        labels: &[usize],
        test: Option<(&[V], &[usize])>,
        options: &RetrainOptions,
    ) -> Result<Vec<RetrainIteration>> {
        if samples.len() != labels.len() {
            return Err(HdcError::InvalidParameter(format!(
                "got {} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }
        if samples.is_empty() {
            return Err(HdcError::EmptyVectorSet);
        }
        if let Some(&bad) = labels.iter().find(|&&l| l >= self.classes.len()) {
            return Err(HdcError::InvalidParameter(format!(
                "label {} outside the {} trained classes",
                bad,
                self.classes.len()
            )));
        }
        if am.len() != self.classes.len() {
            return Err(HdcError::InvalidParameter(format!(
                "associative memory holds {} prototypes for {} classes",
                am.len(),
                self.classes.len()
            )));
        }
        if let Some((test_samples, test_labels)) = test {
            if test_samples.len() != test_labels.len() {
                return Err(HdcError::InvalidParameter(format!(
                    "got {} test samples but {} test labels",
                    test_samples.len(),
                    test_labels.len()
                )));
            }
        }

        let mut history = Vec::with_capacity(options.iterations);

        for iteration in 0..options.iterations {
            let mut correct = 0usize;

            for (sample, &label) in samples.iter().zip(labels) {
                let predicted = am.search(sample)?;
                if predicted == label {
                    correct += 1;
                } else {
                    self.classes[label].push(sample.clone());
                    self.classes[predicted].push(ops::invert(sample));
                }
            }

            // Accuracy reflects the prototypes this pass classified with
            let train_accuracy = correct as f32 / samples.len() as f32;
            *am = self.build_am()?;

            let test_accuracy = match test {
                Some((test_samples, test_labels)) => {
                    Some(evaluate(am, test_samples, test_labels)?)
                }
                None => None,
            };

            match test_accuracy {
                Some(acc) => tracing::info!(
                    "Retrain iteration {}: train accuracy {:.4}, test accuracy {:.4}",
                    iteration,
                    train_accuracy,
                    acc
                ),
                None => tracing::info!(
                    "Retrain iteration {}: train accuracy {:.4}",
                    iteration,
                    train_accuracy
                ),
            }

            history.push(RetrainIteration {
                iteration,
                train_accuracy,
                test_accuracy,
            });
        }

        Ok(history)
    }
}

/// Fraction of samples whose nearest prototype matches their label
pub fn evaluate<V: Hypervector>(
    am: &AssociativeMemory<V>,
    samples: &[V],
    labels: &[usize],
) -> Result<f32> {
    if samples.len() != labels.len() {
        return Err(HdcError::InvalidParameter(format!(
            "got {} samples but {} labels",
            samples.len(),
            labels.len()
        )));
    }
    if samples.is_empty() {
        return Err(HdcError::EmptyVectorSet);
    }

    let mut correct = 0usize;
    for (sample, &label) in samples.iter().zip(labels) {
        if am.search(sample)? == label {
            correct += 1;
        }
    }

    Ok(correct as f32 / samples.len() as f32)
}
