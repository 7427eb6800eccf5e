pub mod kpi_card;
pub mod location_picker;
pub mod prediction_form;
pub mod property_card;
pub mod result_display;
pub mod toast;
