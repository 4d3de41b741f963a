use serde::Serialize;

/// Capability required of every vertex: a stable, unique string key.
///
/// Two values with the same id are the same vertex as far as the graph is
/// concerned.
pub trait Identifiable {
    fn id(&self) -> &str;
}

impl Identifiable for String {
    fn id(&self) -> &str {
        self
    }
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Accumulated cost of a path or a single edge.
///
/// Ordering is total (`f64::total_cmp`) so weights can key a binary heap
/// without panicking on NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<u32> for Weight {
    fn from(hops: u32) -> Self {
        Weight(hops as f64)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_default() {
        assert_eq!(Weight::default().value(), 0.0);
        assert_eq!(Weight::default(), Weight::ZERO);
    }

    #[test]
    fn test_weight_from_u32() {
        assert_eq!(Weight::from(5).value(), 5.0);
    }

    #[test]
    fn test_weight_addition() {
        let sum = Weight::new(1.5) + Weight::new(2.5);
        assert_eq!(sum.value(), 4.0);

        let mut acc = Weight::ZERO;
        acc += Weight::from(3);
        assert_eq!(acc.value(), 3.0);
    }

    #[test]
    fn test_weight_sum() {
        let total: Weight = [1.0, 2.0, 0.5].into_iter().map(Weight::new).sum();
        assert_eq!(total.value(), 3.5);
    }

    #[test]
    fn test_weight_ordering_is_total() {
        assert!(Weight::new(1.0) < Weight::new(2.0));
        assert_eq!(
            Weight::new(2.0).cmp(&Weight::new(2.0)),
            std::cmp::Ordering::Equal
        );
        // NaN sorts after every finite weight instead of panicking
        assert!(Weight::new(f64::NAN) > Weight::new(f64::MAX));
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::new(4.0).to_string(), "4.000000");
    }

    #[test]
    fn test_string_is_identifiable() {
        let v = "NL".to_string();
        assert_eq!(v.id(), "NL");
        let borrowed: &String = &v;
        assert_eq!(Identifiable::id(&borrowed), "NL");
    }
}
