use crate::errors::CbrResult;
use crate::menu::CulturalTradition;

/// Optional embedding backend for cultural similarity.
///
/// When injected, the similarity engine replaces its hand-authored cultural
/// adjacency table with cosine similarity over these vectors. The default
/// engine runs without one.
pub trait ICulturalEmbedder: Send + Sync {
    fn embed(&self, tradition: CulturalTradition) -> CbrResult<Vec<f32>>;
    fn name(&self) -> &str;
    fn is_available(&self) -> bool {
        true
    }
}
