pub mod erosion;
pub mod landform;

pub use erosion::{classify_erosion, RiskGrid};
pub use landform::{
    annotate_landforms, classify_landforms, AnnotationClass, Landform, LandformAnnotation,
    LandformCell,
};
