mod tests {
    use embassy_futures::block_on;
    use embedded_hal_async::delay::DelayNs;
    use myrtio_effect_player::{
        EffectCommand, EffectKind, EffectRenderer, EffectTimings, OutputDriver, Rgb, StripDriver,
    };
    use smart_leds::SmartLedsWrite;

    const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Writer keeping every frame it was given
    #[derive(Default)]
    struct FrameLog {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for FrameLog {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_fill_and_show_whole_strip() {
        let mut driver: StripDriver<FrameLog, 8> = StripDriver::new(FrameLog::default());
        assert_eq!(driver.frame(), &[OFF; 8]);

        let color = Rgb { r: 1, g: 2, b: 3 };
        driver.fill(color);
        assert!(driver.writer().frames.is_empty());

        driver.show();
        assert_eq!(driver.writer().frames, [vec![color; 8]]);
    }

    #[test]
    fn test_write_failure_is_ignored() {
        let mut driver: StripDriver<FrameLog, 4> = StripDriver::new(FrameLog {
            frames: Vec::new(),
            fail: true,
        });

        driver.fill(Rgb { r: 9, g: 9, b: 9 });
        driver.show();
        assert!(driver.writer().frames.is_empty());
        assert_eq!(driver.frame(), &[Rgb { r: 9, g: 9, b: 9 }; 4]);
    }

    #[test]
    fn test_renderer_drives_strip() {
        let driver: StripDriver<FrameLog, 241> = StripDriver::new(FrameLog::default());
        let mut renderer = EffectRenderer::new(driver, NoDelay, EffectTimings::default());
        let command = EffectCommand::new(EffectKind::Strobe).with_repeat_count(2);

        assert_eq!(block_on(renderer.render(&command)), Ok(()));

        let frames = &renderer.output().writer().frames;
        assert_eq!(frames.len(), 5);
        assert!(frames.iter().all(|frame| frame.len() == 241));
        assert_eq!(frames[0][240], Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(frames[4], vec![OFF; 241]);
        assert_eq!(renderer.output().frame(), &[OFF; 241]);
    }
}
