//! Resampling filter selection

/// Available resize filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Lanczos with radius 3 (high quality, recommended)
    Lanczos3,
    /// Catmull-Rom cubic spline (legacy antialiasing fallback)
    CatmullRom,
    /// Triangle (linear interpolation)
    Triangle,
}

/// Filters in preference order for icon downscaling
const FILTER_PREFERENCE: [FilterType; 2] = [FilterType::Lanczos3, FilterType::CatmullRom];

impl Default for FilterType {
    fn default() -> Self {
        Self::Lanczos3
    }
}

impl From<FilterType> for image::imageops::FilterType {
    fn from(filter: FilterType) -> Self {
        match filter {
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
            FilterType::CatmullRom => image::imageops::FilterType::CatmullRom,
            FilterType::Triangle => image::imageops::FilterType::Triangle,
        }
    }
}

impl FilterType {
    /// Pick the best resampling filter the codec backend supports
    ///
    /// Walks the preference list and takes the first supported entry,
    /// so a backend without a Lanczos-class filter still gets an
    /// antialiasing one.
    pub fn best_available() -> Self {
        FILTER_PREFERENCE
            .into_iter()
            .find(|filter| filter.is_supported())
            .unwrap_or(FilterType::Triangle)
    }

    /// Whether the codec backend can execute this filter
    fn is_supported(self) -> bool {
        match self {
            FilterType::Lanczos3 | FilterType::CatmullRom | FilterType::Triangle => true,
        }
    }
}
