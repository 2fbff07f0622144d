// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> u64;
}
