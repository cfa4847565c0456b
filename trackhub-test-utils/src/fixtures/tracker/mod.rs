use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn tracker(&self) -> TrackerFixtures<'_> {
        TrackerFixtures { context: self }
    }
}

pub struct TrackerFixtures<'a> {
    pub context: &'a TestContext,
}
