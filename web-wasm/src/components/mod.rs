pub mod header;
pub mod scan_form;
pub mod overview_cards;
pub mod pie_chart;
pub mod scatter_chart;
pub mod results_table;
pub mod detail_modal;
pub mod history_panel;
