//! The static filter catalog.
//!
//! Each [`FilterKind`] variant is one filter the processing service
//! understands, together with its display metadata and parameter
//! specifications. The catalog is fixed at compile time, so lookup by
//! variant is total; lookup by string key goes through
//! [`FilterKind::from_key`] and surfaces misses as
//! [`PipelineError::UnknownFilter`].

use std::fmt;

use crate::types::{ParameterSpec, PipelineError};

/// Parameter specs for the Gaussian blur filter.
///
/// The kernel size steps by 2 so it stays odd, which is what the
/// service-side convolution requires.
const BLUR_PARAMS: [ParameterSpec; 1] = [ParameterSpec {
    name: "ksize",
    label: "Kernel Size",
    min: 1,
    max: 31,
    step: 2,
    default: 5,
}];

const THRESHOLD_PARAMS: [ParameterSpec; 2] = [
    ParameterSpec {
        name: "thresh",
        label: "Threshold",
        min: 0,
        max: 255,
        step: 1,
        default: 127,
    },
    ParameterSpec {
        name: "maxval",
        label: "Max Value",
        min: 0,
        max: 255,
        step: 1,
        default: 255,
    },
];

const ERODE_PARAMS: [ParameterSpec; 2] = [
    ParameterSpec {
        name: "kernel",
        label: "Kernel Size",
        min: 1,
        max: 15,
        step: 1,
        default: 3,
    },
    ParameterSpec {
        name: "iterations",
        label: "Iterations",
        min: 1,
        max: 10,
        step: 1,
        default: 1,
    },
];

// Dilation takes the same structuring-element parameters as erosion.
const DILATE_PARAMS: [ParameterSpec; 2] = ERODE_PARAMS;

const CANNY_PARAMS: [ParameterSpec; 2] = [
    ParameterSpec {
        name: "threshold1",
        label: "Threshold 1",
        min: 0,
        max: 255,
        step: 1,
        default: 100,
    },
    ParameterSpec {
        name: "threshold2",
        label: "Threshold 2",
        min: 0,
        max: 255,
        step: 1,
        default: 200,
    },
];

/// Identifier for one filter in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Convert the image to grayscale.
    Gray,
    /// Gaussian blur.
    Blur,
    /// Fixed-level thresholding.
    Threshold,
    /// Morphological erosion.
    Erode,
    /// Morphological dilation.
    Dilate,
    /// Canny edge detection.
    Canny,
    /// Color inversion.
    Invert,
}

impl FilterKind {
    /// All filters in catalog order, for rendering the filter bar.
    pub const ALL: [Self; 7] = [
        Self::Gray,
        Self::Blur,
        Self::Threshold,
        Self::Erode,
        Self::Dilate,
        Self::Canny,
        Self::Invert,
    ];

    /// Wire key of this filter, as the service endpoints expect it.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Blur => "blur",
            Self::Threshold => "threshold",
            Self::Erode => "erode",
            Self::Dilate => "dilate",
            Self::Canny => "canny",
            Self::Invert => "invert",
        }
    }

    /// Resolve a wire key back to its catalog entry.
    ///
    /// Returns `None` for keys the catalog does not know; callers that
    /// treat a miss as a fault should use [`definition`] instead.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Display name shown on the filter's toggle button.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gray => "Grayscale",
            Self::Blur => "Blur",
            Self::Threshold => "Threshold",
            Self::Erode => "Erode",
            Self::Dilate => "Dilate",
            Self::Canny => "Canny Edges",
            Self::Invert => "Invert Colors",
        }
    }

    /// One-line description, used as the button tooltip.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Gray => "Convert the image to shades of gray",
            Self::Blur => "Apply a Gaussian blur to the image",
            Self::Threshold => "Binarize the image against a cutoff value",
            Self::Erode => "Erode the contours of the image",
            Self::Dilate => "Dilate the contours of the image",
            Self::Canny => "Detect edges with the Canny detector",
            Self::Invert => "Invert the colors of the image",
        }
    }

    /// Icon identifier for the UI layer.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Gray => "droplet",
            Self::Blur => "wind",
            Self::Threshold => "contrast",
            Self::Erode => "arrow-down-left",
            Self::Dilate => "arrow-up-right",
            Self::Canny => "activity",
            Self::Invert => "repeat",
        }
    }

    /// Parameter specifications, in the order the UI renders them and
    /// the wire map names them. Empty for parameterless filters.
    #[must_use]
    pub const fn params(self) -> &'static [ParameterSpec] {
        match self {
            Self::Gray | Self::Invert => &[],
            Self::Blur => &BLUR_PARAMS,
            Self::Threshold => &THRESHOLD_PARAMS,
            Self::Erode => &ERODE_PARAMS,
            Self::Dilate => &DILATE_PARAMS,
            Self::Canny => &CANNY_PARAMS,
        }
    }

    /// Look up one parameter spec by wire name.
    #[must_use]
    pub fn param(self, name: &str) -> Option<&'static ParameterSpec> {
        self.params().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Resolve a wire key, treating a miss as the internal fault it is.
///
/// # Errors
///
/// Returns [`PipelineError::UnknownFilter`] when `key` names no catalog
/// entry. That only happens when a control was wired to a key the
/// catalog never contained.
pub fn definition(key: &str) -> Result<FilterKind, PipelineError> {
    FilterKind::from_key(key).ok_or_else(|| PipelineError::UnknownFilter(key.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_variant() {
        // If you add a variant to FilterKind, update ALL and this count.
        assert_eq!(
            FilterKind::ALL.len(),
            7,
            "FilterKind::ALL length must match variant count"
        );
        let mut seen = std::collections::HashSet::new();
        for kind in FilterKind::ALL {
            assert!(seen.insert(kind), "Duplicate filter in ALL: {kind}");
        }
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn from_key_rejects_unknown_and_is_case_sensitive() {
        assert_eq!(FilterKind::from_key("sepia"), None);
        assert_eq!(FilterKind::from_key("Blur"), None);
        assert_eq!(FilterKind::from_key(""), None);
    }

    #[test]
    fn definition_miss_is_unknown_filter() {
        let err = definition("sharpen").unwrap_err();
        assert_eq!(err, PipelineError::UnknownFilter("sharpen".to_owned()));
    }

    #[test]
    fn definition_hit_returns_kind() {
        assert_eq!(definition("canny").unwrap(), FilterKind::Canny);
    }

    #[test]
    fn parameterless_filters_have_empty_specs() {
        assert!(FilterKind::Gray.params().is_empty());
        assert!(FilterKind::Invert.params().is_empty());
    }

    #[test]
    fn blur_kernel_spec_matches_service_contract() {
        let specs = FilterKind::Blur.params();
        assert_eq!(specs.len(), 1);
        let ksize = &specs[0];
        assert_eq!(ksize.name, "ksize");
        assert_eq!((ksize.min, ksize.max, ksize.step), (1, 31, 2));
        assert_eq!(ksize.default, 5);
    }

    #[test]
    fn erode_and_dilate_share_parameter_shape() {
        assert_eq!(FilterKind::Erode.params(), FilterKind::Dilate.params());
    }

    #[test]
    fn param_names_are_unique_within_each_filter() {
        for kind in FilterKind::ALL {
            let mut names = std::collections::HashSet::new();
            for spec in kind.params() {
                assert!(
                    names.insert(spec.name),
                    "{kind} declares parameter {:?} twice",
                    spec.name
                );
            }
        }
    }

    #[test]
    fn defaults_lie_within_declared_ranges() {
        for kind in FilterKind::ALL {
            for spec in kind.params() {
                assert!(
                    (spec.min..=spec.max).contains(&spec.default),
                    "{kind}.{} default {} outside [{}, {}]",
                    spec.name,
                    spec.default,
                    spec.min,
                    spec.max,
                );
            }
        }
    }

    #[test]
    fn param_lookup_by_name() {
        let spec = FilterKind::Canny.param("threshold2").unwrap();
        assert_eq!(spec.default, 200);
        assert!(FilterKind::Canny.param("ksize").is_none());
        assert!(FilterKind::Gray.param("anything").is_none());
    }
}
