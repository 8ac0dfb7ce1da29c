//! Ordered `(predicate, result)` tables.
//!
//! Style, bonus, archetype and weakness classification are all expressed as
//! static slices of [`Rule`]. Order is significant: [`first_match`] returns
//! the earliest rule whose predicate holds.

/// A named predicate over a context `C` yielding `T` when it matches.
pub struct Rule<C, T> {
    pub name: &'static str,
    pub when: fn(&C) -> bool,
    pub then: T,
}

impl<C, T> std::fmt::Debug for Rule<C, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("then", &self.then)
            .finish()
    }
}

impl<C, T> Rule<C, T> {
    pub fn matches(&self, ctx: &C) -> bool {
        (self.when)(ctx)
    }
}

/// The first rule in table order whose predicate holds.
pub fn first_match<'a, C, T>(rules: &'a [Rule<C, T>], ctx: &C) -> Option<&'a Rule<C, T>> {
    rules.iter().find(|rule| rule.matches(ctx))
}

/// Every matching rule, in table order.
pub fn all_matches<'a, C, T>(
    rules: &'a [Rule<C, T>],
    ctx: &'a C,
) -> impl Iterator<Item = &'a Rule<C, T>> + 'a {
    rules.iter().filter(move |rule| rule.matches(ctx))
}
