mod tests {
    use myrtio_effect_player::queue::TryPushError;
    use myrtio_effect_player::{CommandQueue, EffectCommand, EffectKind, EffectQueue, QUEUE_CAPACITY};

    static SHARED_QUEUE: CommandQueue = CommandQueue::new();

    fn strobe(repeat_count: u32) -> EffectCommand {
        EffectCommand::new(EffectKind::Strobe).with_repeat_count(repeat_count)
    }

    #[test]
    fn test_push_until_full() {
        let queue = CommandQueue::new();
        assert_eq!(queue.capacity(), QUEUE_CAPACITY);

        for i in 0..20 {
            assert!(queue.push(strobe(i + 1)), "push {i} should succeed");
        }
        assert!(queue.is_full());

        assert!(!queue.push(strobe(21)));
        assert_eq!(queue.len(), 20);
    }

    #[test]
    fn test_pop_is_fifo() {
        let queue = CommandQueue::new();
        for i in 1..=5 {
            assert!(queue.push(strobe(i)));
        }

        let popped: Vec<u32> = core::iter::from_fn(|| queue.pop())
            .map(|command| command.repeat_count)
            .collect();
        assert_eq!(popped, [1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let queue = CommandQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_try_push_returns_rejected_value() {
        let queue: EffectQueue<u8, 2> = EffectQueue::new();
        assert_eq!(queue.try_push(1), Ok(()));
        assert_eq!(queue.try_push(2), Ok(()));
        assert_eq!(queue.try_push(3), Err(TryPushError(3)));
    }

    #[test]
    fn test_handles_share_queue() {
        let queue: EffectQueue<u8, 4> = EffectQueue::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        assert!(receiver.is_empty());
        assert_eq!(sender.try_push(7), Ok(()));
        assert!(!receiver.is_empty());
        assert_eq!(receiver.pop(), Some(7));
        assert!(!sender.is_full());
    }

    #[test]
    fn test_static_queue_across_threads() {
        let producer = std::thread::spawn(|| {
            let sender = SHARED_QUEUE.sender();
            let mut pushed = 0;
            for i in 1..=10 {
                if sender.try_push(strobe(i)).is_ok() {
                    pushed += 1;
                }
            }
            pushed
        });
        assert_eq!(producer.join().ok(), Some(10));

        let receiver = SHARED_QUEUE.receiver();
        let mut last = 0;
        while let Some(command) = receiver.pop() {
            assert!(command.repeat_count > last);
            last = command.repeat_count;
        }
        assert_eq!(last, 10);
    }
}
