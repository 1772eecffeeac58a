use super::*;
use crate::nn::module::Module;
use approx::assert_abs_diff_eq;

fn sample() -> Mlp {
    Mlp::with_seed(3, &[4, 4, 1], 17).unwrap()
}

#[test]
fn test_json_round_trip_preserves_parameters() {
    let mlp = sample();
    // Dirty the gradients so we can see they are not carried over.
    mlp.predict(&[1.0, 0.0, 1.0], "tanh").unwrap()[0].backward();

    let restored = Mlp::from_json(&mlp.to_json().unwrap()).unwrap();
    assert_eq!(restored.n_inputs(), 3);
    assert_eq!(restored.layer_sizes(), vec![4, 4, 1]);

    let before = mlp.parameters();
    let after = restored.parameters();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert_abs_diff_eq!(b.value(), a.value(), epsilon = 1e-9);
        assert_eq!(a.grad(), 0.0);
        assert!(!a.ptr_eq(b));
    }

    let x = [0.0, 1.0, 1.0];
    assert_abs_diff_eq!(
        mlp.predict(&x, "sigmoid").unwrap()[0].value(),
        restored.predict(&x, "sigmoid").unwrap()[0].value(),
        epsilon = 1e-12
    );
}

#[test]
fn test_json_field_names() {
    let mlp = Mlp::from_state(&MlpState {
        n_inputs: 1,
        layers: vec![LayerState {
            neurons: vec![NeuronState { weights: vec![0.25], bias: -0.5 }],
        }],
    })
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&mlp.to_json().unwrap()).unwrap();
    assert_eq!(value["nInputs"], 1);
    assert_eq!(value["layers"][0]["neurons"][0]["W"][0], 0.25);
    assert_eq!(value["layers"][0]["neurons"][0]["b"], -0.5);
}

#[test]
fn test_from_json_rejects_garbage() {
    let err = Mlp::from_json("{not json").unwrap_err();
    assert!(matches!(err, ScalarGradError::MalformedPersistedState(_)));
}

#[test]
fn test_from_json_rejects_missing_fields() {
    let err = Mlp::from_json(r#"{"nInputs": 2}"#).unwrap_err();
    assert!(matches!(err, ScalarGradError::MalformedPersistedState(_)));
    let err = Mlp::from_json(r#"{"nInputs": 2, "layers": [{"neurons": [{"W": [1, 2]}]}]}"#).unwrap_err();
    assert!(matches!(err, ScalarGradError::MalformedPersistedState(_)));
}

#[test]
fn test_from_json_rejects_wrong_weight_count() {
    let json = r#"{"nInputs": 2, "layers": [
        {"neurons": [{"W": [0.1, 0.2], "b": 0}, {"W": [0.3, 0.4], "b": 0}]},
        {"neurons": [{"W": [0.5], "b": 0}]}
    ]}"#;
    let err = Mlp::from_json(json).unwrap_err();
    match err {
        ScalarGradError::MalformedPersistedState(msg) => assert!(msg.contains("layer 1 neuron 0")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_from_state_rejects_empty_layers() {
    let state = MlpState { n_inputs: 2, layers: vec![] };
    assert!(Mlp::from_state(&state).is_err());
    let state = MlpState { n_inputs: 2, layers: vec![LayerState { neurons: vec![] }] };
    assert!(Mlp::from_state(&state).is_err());
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("scalargrad_state_test_{}.json", std::process::id()));
    let mlp = sample();
    mlp.save(&path).unwrap();
    let loaded = Mlp::load(&path).unwrap();
    assert_eq!(loaded.to_state(), mlp.to_state());
    std::fs::remove_file(&path).unwrap();

    let err = Mlp::load(&path).unwrap_err();
    assert!(matches!(err, ScalarGradError::Io(_)));
}
