pub mod report_category;
pub mod report_error;
pub mod report_form;
