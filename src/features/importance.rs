//! Feature importances of the XGBoost model, computed offline at training time.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
}

const fn fi(feature: &'static str, importance: f64) -> FeatureImportance {
    FeatureImportance {
        feature,
        importance,
    }
}

/// Descending by importance.
pub const FEATURE_IMPORTANCES: [FeatureImportance; 13] = [
    fi("NumOfProducts", 0.323888),
    fi("IsActiveMember", 0.164146),
    fi("Age", 0.109550),
    fi("Geography_Germany", 0.091373),
    fi("Balance", 0.052786),
    fi("Geography_France", 0.046463),
    fi("Gender_Female", 0.045283),
    fi("Geography_Spain", 0.036855),
    fi("CreditScore", 0.035005),
    fi("EstimatedSalary", 0.032655),
    fi("HasCrCard", 0.031940),
    fi("Tenure", 0.030054),
    fi("Gender_Male", 0.000000),
];
