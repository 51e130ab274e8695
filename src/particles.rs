//! Flow-following particles with fading trails

use crate::config::particles::{
    LINE_WIDTH, PALETTE, SPEED_MAX, SPEED_MIN, TRAIL_MAX, TRAIL_MIN,
};
use crate::field::FlowField;
use crate::surface::{Rgb, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Where a particle is in its life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Following the field and growing its trail
    Active,
    /// Frozen in place, trail shrinking from the tail
    Dying,
    /// Trail has collapsed; the next update respawns it
    Respawn,
}

#[derive(Debug, Clone)]
pub struct Particle {
    x: f32,
    y: f32,
    speed_modifier: u8,
    /// Oldest position first
    trail: VecDeque<(f32, f32)>,
    max_trail_length: usize,
    angle: f32,
    life_timer: i32,
    color: Rgb,
}

impl Particle {
    /// Spawn at a random whole-pixel position inside `width` x `height`
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Self {
        let speed_modifier = rng.gen_range(SPEED_MIN..=SPEED_MAX);
        let max_trail_length = rng.gen_range(TRAIL_MIN..TRAIL_MAX);
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let (x, y) = random_position(rng, width, height);
        Self::new(x, y, speed_modifier, max_trail_length, color)
    }

    pub fn new(x: f32, y: f32, speed_modifier: u8, max_trail_length: usize, color: Rgb) -> Self {
        let max_trail_length = max_trail_length.max(1);
        Self {
            x,
            y,
            speed_modifier,
            trail: VecDeque::from([(x, y)]),
            max_trail_length,
            angle: 0.0,
            life_timer: Self::lifetime(max_trail_length),
            color,
        }
    }

    fn lifetime(max_trail_length: usize) -> i32 {
        (max_trail_length * 2) as i32
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn speed_modifier(&self) -> u8 {
        self.speed_modifier
    }

    pub fn trail(&self) -> &VecDeque<(f32, f32)> {
        &self.trail
    }

    pub fn max_trail_length(&self) -> usize {
        self.max_trail_length
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn life_timer(&self) -> i32 {
        self.life_timer
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn phase(&self) -> Phase {
        if self.life_timer >= 1 {
            Phase::Active
        } else if self.trail.len() > 1 {
            Phase::Dying
        } else {
            Phase::Respawn
        }
    }

    /// Stroke the trail as one open polyline
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.trail.len() < 2 {
            return;
        }
        let (head, tail) = self.trail.as_slices();
        if tail.is_empty() {
            surface.stroke_polyline(head, self.color, LINE_WIDTH);
        } else {
            let points: Vec<(f32, f32)> = self.trail.iter().copied().collect();
            surface.stroke_polyline(&points, self.color, LINE_WIDTH);
        }
    }

    /// Advance one tick
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        field: &FlowField,
        rng: &mut R,
        width: u32,
        height: u32,
    ) {
        self.life_timer -= 1;
        if self.life_timer >= 1 {
            self.angle = field.angle_at(self.x, self.y);
            let speed = self.speed_modifier as f32;
            self.x += self.angle.cos() * speed;
            self.y += self.angle.sin() * speed;

            self.trail.push_back((self.x, self.y));
            if self.trail.len() > self.max_trail_length {
                self.trail.pop_front();
            }
        } else if self.trail.len() > 1 {
            self.trail.pop_front();
        } else {
            self.reset(rng, width, height);
        }
    }

    /// Move to a fresh random position with a full lifetime
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, width: u32, height: u32) {
        let (x, y) = random_position(rng, width, height);
        self.x = x;
        self.y = y;
        self.trail.clear();
        self.trail.push_back((x, y));
        self.life_timer = Self::lifetime(self.max_trail_length);
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> (f32, f32) {
    let x = rng.gen_range(0..width.max(1)) as f32;
    let y = rng.gen_range(0..height.max(1)) as f32;
    (x, y)
}

/// Fixed-size set of particles sharing one random source
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
    width: u32,
    height: u32,
}

impl ParticleSystem {
    /// Build `count` particles. `seed` makes spawning reproducible.
    pub fn new(count: usize, width: u32, height: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(count, width, height, rng)
    }

    pub fn with_rng(count: usize, width: u32, height: u32, mut rng: StdRng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            particles,
            rng,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Draw every trail, updating each particle right after it is drawn
    pub fn draw_and_update<S: Surface + ?Sized>(&mut self, surface: &mut S, field: &FlowField) {
        for particle in &mut self.particles {
            particle.draw(surface);
            particle.update(field, &mut self.rng, self.width, self.height);
        }
    }
}
