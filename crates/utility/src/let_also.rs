/// Scope functions for expression chains, e.g. to turn the rows returned by a
/// query into models without introducing a temporary binding.
pub trait LetAlso: Sized {
    /// Passes `self` by value into `f` and returns its result.
    fn let_owned<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Lets `f` mutate `self`, then returns it.
    fn also<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        f(&mut self);
        self
    }
}

impl<T> LetAlso for T {}

#[cfg(test)]
mod tests {
    use super::LetAlso;

    #[test]
    fn let_owned_maps_value() {
        let rows = vec![1, 2, 3];
        let total = rows.let_owned(|rows| rows.into_iter().sum::<i32>());
        assert_eq!(total, 6);
    }

    #[test]
    fn also_mutates_and_returns() {
        let names = Vec::new().also(|names| names.push("Essentials"));
        assert_eq!(names, vec!["Essentials"]);
    }
}
