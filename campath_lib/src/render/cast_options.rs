/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use crate::camera::AxisConvention;

use super::RayLayout;

/// Settings of the ray caster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastOptions {
    /// Requested shape of the batch
    pub layout: RayLayout,
    /// Convention of the poses being cast
    pub convention: AxisConvention,
    /// Cast frames in parallel
    pub multi_thread: bool,
}

impl CastOptions {
    pub fn new(layout: RayLayout, convention: AxisConvention, multi_thread: bool) -> CastOptions {
        CastOptions {
            layout,
            convention,
            multi_thread,
        }
    }

    pub fn builder() -> CastOptionsBuilder {
        CastOptionsBuilder::default()
    }
}

/// Flattened, OpenCV poses, parallel
impl Default for CastOptions {
    fn default() -> Self {
        CastOptions {
            layout: RayLayout::Flattened,
            convention: AxisConvention::OpenCv,
            multi_thread: true,
        }
    }
}

/// Builder of [`CastOptions`], unset fields take the default value.
#[derive(Debug, Default, Clone, Copy)]
pub struct CastOptionsBuilder {
    layout: Option<RayLayout>,
    convention: Option<AxisConvention>,
    multi_thread: Option<bool>,
}

impl CastOptionsBuilder {
    pub fn layout(mut self, layout: RayLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn convention(mut self, convention: AxisConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    pub fn multi_thread(mut self, multi_thread: bool) -> Self {
        self.multi_thread = Some(multi_thread);
        self
    }

    pub fn build(self) -> CastOptions {
        let default = CastOptions::default();
        CastOptions {
            layout: self.layout.unwrap_or(default.layout),
            convention: self.convention.unwrap_or(default.convention),
            multi_thread: self.multi_thread.unwrap_or(default.multi_thread),
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn builder_defaults() {
        assert_eq!(CastOptions::builder().build(), CastOptions::default());
    }

    #[test]
    fn builder_sets() {
        let options = CastOptions::builder()
            .layout(RayLayout::Stacked)
            .convention(AxisConvention::OpenGl)
            .multi_thread(false)
            .build();

        assert_eq!(
            options,
            CastOptions::new(RayLayout::Stacked, AxisConvention::OpenGl, false)
        );
    }
}
