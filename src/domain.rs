use {
    crate::test_case::Bottom,
    anyhow::{bail, Result},
    log::debug,
    ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip},
    serde::Deserialize,
};

/// Geometry of the basin and beach
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomainParameters {
    /// Depth at rest over the flat part of the bed (H0)
    pub still_water_depth: f64,
    /// Start of the beach (xb)
    pub beach_start: f64,
    /// Slope of the beach (sb)
    pub beach_slope: f64,
    /// Depth at the end of the beach (Hend)
    pub beach_end_depth: f64,
    /// Length in x when the bottom is flat
    pub flat_basin_length: f64,
    /// Length in y (Ly)
    pub basin_width: f64,
    /// End of the x-transform (Lw)
    pub transform_length: f64,
    pub resolution_x: f64,
    pub resolution_y: f64,
    /// Order of the vertical expansion (n_z)
    pub vertical_order: usize,
}

impl Default for DomainParameters {
    fn default() -> Self {
        DomainParameters {
            still_water_depth: 1.0,
            beach_start: 1.0,
            beach_slope: 0.0,
            beach_end_depth: 1.0,
            flat_basin_length: 100.0,
            basin_width: 1.0,
            transform_length: 1.0,
            resolution_x: 0.01,
            resolution_y: 1.0,
            vertical_order: 8,
        }
    }
}

/// Still-water depth, flat up to the beach and decreasing linearly beyond it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthProfile {
    pub still_water_depth: f64,
    pub beach_start: f64,
    pub beach_slope: f64,
}

impl DepthProfile {
    pub fn depth(&self, x: f64) -> f64 {
        if x <= self.beach_start {
            self.still_water_depth
        } else {
            self.still_water_depth - self.beach_slope * (x - self.beach_start)
        }
    }

    /// Fills `field` with the depth at each node x-coordinate in `xs`.
    pub fn fill(&self, mut field: ArrayViewMut1<f64>, xs: ArrayView1<f64>) {
        Zip::from(&mut field)
            .and(&xs)
            .par_apply(|h, &x| *h = self.depth(x));
    }
}

/// Resolved numerical domain
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub profile: DepthProfile,
    /// Depth at the end of the beach (Hend)
    pub beach_end_depth: f64,
    /// Length in x (Lx)
    pub length: f64,
    /// Length in y (Ly)
    pub width: f64,
    /// End of the x-transform (Lw)
    pub transform_length: f64,
    pub resolution_x: f64,
    pub resolution_y: f64,
    pub vertical_order: usize,
}

impl Domain {
    /// H0
    pub fn still_water_depth(&self) -> f64 {
        self.profile.still_water_depth
    }

    pub fn cells_x(&self) -> usize {
        cell_count(self.length, self.resolution_x)
    }

    pub fn cells_y(&self) -> usize {
        cell_count(self.width, self.resolution_y)
    }

    /// Evenly spaced node coordinates spanning `[0, Lx]`
    pub fn nodes_x(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.length, self.cells_x() + 1)
    }

    /// Positional form `(H0, xb, sb, H_expr, Hend, Lx, Ly, Lw, res_x, res_y, n_z)`
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        f64,
        f64,
        f64,
        DepthProfile,
        f64,
        f64,
        f64,
        f64,
        f64,
        f64,
        usize,
    ) {
        (
            self.profile.still_water_depth,
            self.profile.beach_start,
            self.profile.beach_slope,
            self.profile,
            self.beach_end_depth,
            self.length,
            self.width,
            self.transform_length,
            self.resolution_x,
            self.resolution_y,
            self.vertical_order,
        )
    }
}

fn cell_count(length: f64, resolution: f64) -> usize {
    ((length / resolution).round() as usize).max(1)
}

/// Builds the domain geometry for the given bottom type.
pub fn domain(params: &DomainParameters, bottom: Bottom) -> Result<Domain> {
    for (name, value) in &[
        ("still_water_depth", params.still_water_depth),
        ("beach_end_depth", params.beach_end_depth),
        ("flat_basin_length", params.flat_basin_length),
        ("basin_width", params.basin_width),
        ("transform_length", params.transform_length),
        ("resolution_x", params.resolution_x),
        ("resolution_y", params.resolution_y),
    ] {
        if !(value.is_finite() && *value > 0.0) {
            bail!("Domain parameter {} must be positive, got {}", name, value);
        }
    }
    for (name, value) in &[
        ("beach_start", params.beach_start),
        ("beach_slope", params.beach_slope),
    ] {
        if !value.is_finite() {
            bail!("Domain parameter {} must be finite, got {}", name, value);
        }
    }

    let length = match bottom {
        Bottom::Flat => params.flat_basin_length,
        Bottom::Nonuniform => {
            if params.beach_slope <= 0.0 {
                bail!(
                    "A nonuniform bottom requires a positive beach slope, got {}",
                    params.beach_slope
                );
            }
            params.beach_start
                + (params.still_water_depth - params.beach_end_depth) / params.beach_slope
        }
    };

    if !(length.is_finite() && length > 0.0) {
        bail!(
            "Basin length must be positive, got {} for a {:?} bottom",
            length,
            bottom
        );
    }

    debug!("Basin length {} for {:?} bottom", length, bottom);

    Ok(Domain {
        profile: DepthProfile {
            still_water_depth: params.still_water_depth,
            beach_start: params.beach_start,
            beach_slope: params.beach_slope,
        },
        beach_end_depth: params.beach_end_depth,
        length,
        width: params.basin_width,
        transform_length: params.transform_length,
        resolution_x: params.resolution_x,
        resolution_y: params.resolution_y,
        vertical_order: params.vertical_order,
    })
}
