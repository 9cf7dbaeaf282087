use crate::{
    obs::{SortEvent, sink::record},
    order::{SortDirection, SortSpec, SortSpecError},
    path::FieldPath,
    text::{Collation, TextComparator},
    value::{Value, compare_value_with},
};
use std::{cmp::Ordering, fmt, sync::Arc};

///
/// SortComparator
///
/// Composite comparator over two records built from a [`SortSpec`].
///
/// Keys are evaluated strictly in spec order; the first non-equal key
/// decides and a full tie is `Equal`. The comparator is not stable on its
/// own: feed it to a stable sort (`slice::sort_by`, `sort_rows`) when the
/// input order of tied rows matters.
///

#[derive(Clone)]
pub struct SortComparator {
    spec: SortSpec,
    text: Arc<dyn TextComparator>,
}

impl SortComparator {
    /// Build with binary text collation.
    #[must_use]
    pub fn new(spec: SortSpec) -> Self {
        Self::with_text(spec, Arc::new(Collation::Binary))
    }

    /// Build with an injected text comparator.
    #[must_use]
    pub fn with_text(spec: SortSpec, text: Arc<dyn TextComparator>) -> Self {
        tracing::debug!(keys = spec.len(), spec = %spec, "built sort comparator");
        record(SortEvent::ComparatorBuilt {
            keys: spec.len() as u64,
        });

        Self { spec, text }
    }

    /// Build from raw `$sort`-style `(dotted key, 1 | -1)` pairs.
    ///
    /// Fails immediately on any direction other than `1` / `-1` or on a
    /// malformed path; nothing is deferred to comparison time.
    pub fn build<I, K>(pairs: I) -> Result<Self, SortSpecError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        Self::build_with(pairs, Arc::new(Collation::Binary))
    }

    /// [`build`](Self::build) with an injected text comparator.
    pub fn build_with<I, K>(pairs: I, text: Arc<dyn TextComparator>) -> Result<Self, SortSpecError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        match SortSpec::from_pairs(pairs) {
            Ok(spec) => Ok(Self::with_text(spec, text)),
            Err(err) => {
                tracing::debug!(error = %err, "rejected sort spec");
                record(SortEvent::SpecRejected);

                Err(err)
            }
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &SortSpec {
        &self.spec
    }

    /// Compare two records under the configured keys.
    #[must_use]
    pub fn compare(&self, left: &Value, right: &Value) -> Ordering {
        for key in &self.spec {
            let ordering = self.compare_key(left, right, &key.path, key.direction);

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    /// Borrow as a plain closure for APIs that want `FnMut(&T, &T) -> Ordering`.
    pub fn as_fn(&self) -> impl Fn(&Value, &Value) -> Ordering + '_ {
        move |left, right| self.compare(left, right)
    }

    // Compare one configured key across two records.
    fn compare_key(
        &self,
        left: &Value,
        right: &Value,
        path: &FieldPath,
        direction: SortDirection,
    ) -> Ordering {
        let left = path.resolve(left);
        let right = path.resolve(right);
        let ordering = compare_value_with(left, right, self.text.as_ref());

        direction.apply(ordering)
    }
}

impl fmt::Debug for SortComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortComparator")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}
