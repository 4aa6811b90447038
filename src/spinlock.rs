// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
On the wasm main thread, we can't necessarily lock.

Instead we use a reader/writer spinlock.  Hold it for as short a time as possible.

Locks are released by guards, so a panic inside the critical section unlocks on unwind
instead of wedging every later caller.
*/

use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const UNLOCKED: u8 = 0;
//up to 254 readers, or 1 writer (val = 255)
const LOCKED_WRITE: u8 = u8::MAX;

pub struct Spinlock<T> {
    data: UnsafeCell<T>,
    state: AtomicU8,
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send + Sync> Sync for Spinlock<T> {}

pub struct ReadGuard<'a, T> {
    lock: &'a Spinlock<T>,
}

pub struct WriteGuard<'a, T> {
    lock: &'a Spinlock<T>,
}

impl<T> Spinlock<T> {
    pub const fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            state: AtomicU8::new(UNLOCKED),
        }
    }

    pub fn write(&self) -> WriteGuard<'_, T> {
        while self
            .state
            .compare_exchange_weak(UNLOCKED, LOCKED_WRITE, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        WriteGuard { lock: self }
    }

    pub fn read(&self) -> ReadGuard<'_, T> {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |v| (v < LOCKED_WRITE - 1).then(|| v + 1))
            .is_err()
        {
            std::hint::spin_loop();
        }
        ReadGuard { lock: self }
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.read())
    }

    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.write())
    }
}

impl<T> Deref for ReadGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        // SAFETY: the reader count excludes writers for the guard's lifetime
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.state.fetch_sub(1, Release);
    }
}

impl<T> Deref for WriteGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        // SAFETY: we hold the only write lock
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: we hold the only write lock
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.state.store(UNLOCKED, Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn readers_share_and_writers_exclude() {
        let lock = Spinlock::new(1);
        {
            let a = lock.read();
            let b = lock.read();
            assert_eq!(*a + *b, 2);
        }
        *lock.write() += 1;
        assert_eq!(lock.with(|v| *v), 2);
    }

    #[test]
    fn panic_inside_with_mut_releases_the_lock() {
        let lock = Spinlock::new(0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            lock.with_mut(|_| panic!("poisoned?"));
        }));
        assert!(result.is_err());
        lock.with_mut(|v| *v = 3);
        assert_eq!(*lock.read(), 3);
    }

    #[test]
    fn concurrent_increments() {
        let lock = Arc::new(Spinlock::new(0u32));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let lock = lock.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        lock.with_mut(|v| *v += 1);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(*lock.read(), 4000);
    }
}
