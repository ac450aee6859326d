pub mod configured_input;
pub mod labeled_validated_input;
