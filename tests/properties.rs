use churn_dashboard::{
    customers::{CustomerRecord, Gender, Geography},
    encode, ensemble,
    error::PredictionError,
    ChurnPredictor, FeatureVector,
};
use proptest::prelude::*;

struct Stub(Option<f64>);

impl ChurnPredictor for Stub {
    fn name(&self) -> &str {
        "stub"
    }

    fn probability(&self, _: &FeatureVector) -> Result<f64, PredictionError> {
        self.0.ok_or(PredictionError::Unavailable {
            reason: "simulated".into(),
        })
    }
}

fn record() -> impl Strategy<Value = CustomerRecord> {
    (
        (300u32..=850, 0usize..3, 0usize..2, 18u32..=100, 0u32..=50),
        (0.0f64..250_000.0, 1u32..=4, any::<bool>(), any::<bool>(), 0.0f64..200_000.0),
    )
        .prop_map(|((credit, geo, gender, age, tenure), (balance, products, card, active, salary))| {
            CustomerRecord {
                customer_id: 1,
                surname: "Doe".into(),
                credit_score: credit,
                geography: Geography::ALL[geo].as_str().into(),
                gender: Gender::ALL[gender].as_str().into(),
                age,
                tenure,
                balance,
                num_of_products: products,
                has_cr_card: card,
                is_active_member: active,
                estimated_salary: salary,
            }
        })
}

proptest! {
    #[test]
    fn one_hot_groups_sum_to_one(r in record()) {
        let fv = encode(&r).unwrap();
        let geo: f64 = ["Geography_France", "Geography_Germany", "Geography_Spain"]
            .iter()
            .map(|n| fv.get(n).unwrap())
            .sum();
        let gender = fv.get("Gender_Male").unwrap() + fv.get("Gender_Female").unwrap();
        prop_assert_eq!(geo, 1.0);
        prop_assert_eq!(gender, 1.0);
    }

    #[test]
    fn encoding_is_idempotent(r in record()) {
        prop_assert_eq!(encode(&r).unwrap(), encode(&r).unwrap());
    }

    #[test]
    fn aggregate_is_mean_of_successes(outcomes in prop::collection::vec(prop::option::of(0.0f64..=1.0), 0..8)) {
        let fv = encode(&CustomerRecord {
            customer_id: 1,
            surname: "Doe".into(),
            credit_score: 600,
            geography: "Spain".into(),
            gender: "Male".into(),
            age: 30,
            tenure: 1,
            balance: 0.0,
            num_of_products: 1,
            has_cr_card: false,
            is_active_member: false,
            estimated_salary: 1.0,
        }).unwrap();
        let stubs: Vec<Stub> = outcomes.iter().map(|o| Stub(*o)).collect();
        let refs: Vec<&dyn ChurnPredictor> = stubs.iter().map(|s| s as &dyn ChurnPredictor).collect();
        let r = ensemble::predict(&fv, &refs);

        let ok: Vec<f64> = outcomes.iter().flatten().copied().collect();
        prop_assert_eq!(r.probabilities.len(), ok.len());
        prop_assert_eq!(r.failures.len(), outcomes.len() - ok.len());
        if ok.is_empty() {
            prop_assert_eq!(r.aggregate, 0.0);
            prop_assert!(r.no_valid_predictions);
        } else {
            let mean = ok.iter().sum::<f64>() / ok.len() as f64;
            prop_assert!((r.aggregate - mean).abs() < 1e-12);
            prop_assert!(!r.no_valid_predictions);
        }
    }
}
