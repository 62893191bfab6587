/// 1-based inclusive coordinate of a feature on a chromosome.
pub type PosType = u32;
/// Length of a chromosome sequence.
pub type LengthType = u64;
