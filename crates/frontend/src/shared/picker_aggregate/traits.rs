/// Базовый трейт для элементов, которые можно выбирать через пикер
pub trait AggregatePickerResult {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
}
