use crate::context::Context;
use crate::demo::Demo;
use crate::driver::Driver;
use crate::surface::Surface;

pub struct Builder<S: Surface, C: Context, D: Demo> {
    surface: Option<S>,
    context: Option<C>,
    demo: Option<D>,
}

impl<S: Surface, C: Context, D: Demo> Builder<S, C, D> {
    pub fn new() -> Self {
        Self {
            surface: None,
            context: None,
            demo: None,
        }
    }

    pub fn with_surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    pub fn with_demo(mut self, demo: D) -> Self {
        self.demo = Some(demo);
        self
    }

    pub fn build(self) -> Result<Driver<S, C, D>, &'static str> {
        let surface = self.surface.ok_or("Surface not provided")?;
        let context = self.context.ok_or("Context not provided")?;
        let demo = self.demo.ok_or("Demo not provided")?;
        Ok(Driver::new(surface, context, demo))
    }
}

impl<S: Surface, C: Context, D: Demo> Default for Builder<S, C, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestingContext;
    use crate::demo::RainbowClear;
    use crate::driver::State;
    use crate::frame::Framebuffer;

    type TestBuilder = Builder<Framebuffer<8, 6>, TestingContext, RainbowClear>;

    #[test]
    fn with_everything() {
        let result = TestBuilder::new()
            .with_surface(Framebuffer::new(0))
            .with_context(TestingContext::new())
            .with_demo(RainbowClear::default())
            .build();
        assert!(result.is_ok());
        assert_eq!(result.map(|driver| driver.state()), Ok(State::Initializing));
    }

    #[test]
    fn without_surface() {
        let result = TestBuilder::new()
            .with_context(TestingContext::new())
            .with_demo(RainbowClear::default())
            .build();
        assert_eq!(result.err(), Some("Surface not provided"));
    }

    #[test]
    fn without_context() {
        let result = TestBuilder::new()
            .with_surface(Framebuffer::new(0))
            .with_demo(RainbowClear::default())
            .build();
        assert_eq!(result.err(), Some("Context not provided"));
    }

    #[test]
    fn without_demo() {
        let result = TestBuilder::new()
            .with_surface(Framebuffer::new(0))
            .with_context(TestingContext::new())
            .build();
        assert_eq!(result.err(), Some("Demo not provided"));
    }
}
