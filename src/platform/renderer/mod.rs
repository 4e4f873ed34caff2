pub mod text_measurer;
