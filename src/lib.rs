pub mod configuration;
pub mod configurationerror;

pub mod math {
    pub mod algorithms {
        pub mod evalpoints;
        pub mod barycentric;
        pub mod clenshaw;
        pub mod coeffmult;
    }

    pub mod interval {
        pub mod intervalerror;
        pub mod interval;
    }

    pub mod chebtech {
        pub mod evaluationmethod;
        pub mod chebtech2;
    }

    pub mod fun {
        pub mod fun;
        pub mod bndfun;
        pub mod breakdata;
    }
}

pub use configuration::Preferences;
pub use configurationerror::ConfigurationError;
pub use math::algorithms::barycentric::bary;
pub use math::algorithms::clenshaw::clenshaw;
pub use math::algorithms::coeffmult::coeffmult;
pub use math::algorithms::evalpoints::EvalPoints;
pub use math::chebtech::chebtech2::Chebtech2;
pub use math::chebtech::evaluationmethod::EvaluationMethod;
pub use math::fun::bndfun::Bndfun;
pub use math::fun::breakdata::{
    compute_breakdata,
    BreakData
};
pub use math::fun::fun::Fun;
pub use math::interval::interval::Interval;
pub use math::interval::intervalerror::IntervalError;
