//! The render loop (runs on the orchestrating thread).

use anyhow::Result;

use crate::core::SharedWorld;
use crate::term::{GameView, Screen};
use crate::types::EndReason;

/// Draw one frame per simulation tick until the session ends.
///
/// Waits on the shared world's tick signal; the snapshot is copied under the
/// lock and turned into a frame outside it. The tick that ends the session is
/// still drawn. Returns the number of frames presented.
///
/// A failing screen stops the session with [`EndReason::Fault`] before the
/// error is returned.
pub fn run_render(shared: &SharedWorld, view: &GameView, screen: &mut dyn Screen) -> Result<u64> {
    let _guard = shared.stop_guard();
    let mut seen = 0;
    let mut frames = 0;

    while let Some(snap) = shared.wait_frame(&mut seen) {
        let fb = view.render(&snap);
        if let Err(err) = screen.present(&fb) {
            log::error!("drawing frame {} failed: {err:#}", snap.tick);
            shared.stop(EndReason::Fault);
            return Err(err);
        }
        frames += 1;
    }

    log::debug!("render finished after {frames} frames");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NeverSpawn, World};
    use crate::term::FrameBuffer;
    use anyhow::bail;

    #[derive(Default)]
    struct Frames(Vec<FrameBuffer>);

    impl Screen for Frames {
        fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
            self.0.push(fb.clone());
            Ok(())
        }
    }

    struct BrokenScreen;

    impl Screen for BrokenScreen {
        fn present(&mut self, _fb: &FrameBuffer) -> Result<()> {
            bail!("stdout closed")
        }
    }

    #[test]
    fn draws_pending_tick_then_stops() {
        let shared = SharedWorld::new(World::new(10, 6));
        shared.tick(&mut NeverSpawn);
        shared.stop(EndReason::Quit);

        let mut frames = Frames::default();
        let drawn = run_render(&shared, &GameView::default(), &mut frames).unwrap();
        assert_eq!(drawn, 1);
        assert_eq!(frames.0.len(), 1);
    }

    #[test]
    fn returns_immediately_when_stopped_before_any_tick() {
        let shared = SharedWorld::new(World::new(10, 6));
        shared.stop(EndReason::Quit);

        let mut frames = Frames::default();
        assert_eq!(run_render(&shared, &GameView::default(), &mut frames).unwrap(), 0);
    }

    #[test]
    fn screen_error_stops_the_session() {
        let shared = SharedWorld::new(World::new(10, 6));
        shared.tick(&mut NeverSpawn);

        let err = run_render(&shared, &GameView::default(), &mut BrokenScreen).unwrap_err();
        assert!(err.to_string().contains("stdout closed"));
        assert_eq!(shared.end_reason(), Some(EndReason::Fault));
    }
}
