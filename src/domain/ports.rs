/// Source of the values rendered into the startup announcement.
pub trait ConfigProvider {
    fn benchmark_name(&self) -> &str;
    fn port(&self) -> u16;
    fn visit_hint(&self) -> &str;
}
