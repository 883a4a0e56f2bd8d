//! Velocity-Verlet force layout with d3-force semantics: an `alpha` energy
//! that decays toward `alpha_target`, velocity decay, and link, collide,
//! center and positional forces applied in that order every tick.

use std::f64::consts::PI;

pub const ALPHA_MIN: f64 = 0.001;
const VELOCITY_DECAY: f64 = 0.4;
const INITIAL_RADIUS: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Simulated state of one node. `fx`/`fy` pin the node while set.
#[derive(Clone, Debug, Default)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub fx: Option<f64>,
	pub fy: Option<f64>,
}

#[derive(Clone, Copy, Debug)]
pub struct Link {
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug)]
pub struct ForceParams {
	pub link_distance: f64,
	pub collide_radius: f64,
	pub center: Point,
	pub x_strength: f64,
	pub y_strength: f64,
}

/// Same linear congruential generator d3-force seeds its jiggle with.
#[derive(Clone, Debug)]
struct Lcg(u64);

impl Lcg {
	fn next(&mut self) -> f64 {
		const A: u64 = 1_664_525;
		const C: u64 = 1_013_904_223;
		const M: u64 = 4_294_967_296;
		self.0 = (A * self.0 + C) % M;
		self.0 as f64 / M as f64
	}

	fn jiggle(&mut self) -> f64 {
		(self.next() - 0.5) * 1e-6
	}
}

pub struct Simulation {
	bodies: Vec<Body>,
	links: Vec<Link>,
	link_strength: Vec<f64>,
	link_bias: Vec<f64>,
	targets: Vec<Point>,
	params: ForceParams,
	alpha: f64,
	alpha_decay: f64,
	alpha_target: f64,
	running: bool,
	rng: Lcg,
}

impl Simulation {
	/// `targets[i]` is the point node `i` is biased toward.
	pub fn new(targets: Vec<Point>, links: Vec<Link>, params: ForceParams) -> Self {
		let golden_angle = PI * (3.0 - 5f64.sqrt());
		let bodies = (0..targets.len())
			.map(|i| {
				let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
				let angle = i as f64 * golden_angle;
				Body {
					x: radius * angle.cos(),
					y: radius * angle.sin(),
					..Body::default()
				}
			})
			.collect();

		let mut degree = vec![0usize; targets.len()];
		for link in &links {
			degree[link.source] += 1;
			degree[link.target] += 1;
		}
		let (link_strength, link_bias): (Vec<f64>, Vec<f64>) = links
			.iter()
			.map(|l| {
				let (s, t) = (degree[l.source] as f64, degree[l.target] as f64);
				(1.0 / s.min(t), s / (s + t))
			})
			.unzip();

		Self {
			bodies,
			links,
			link_strength,
			link_bias,
			targets,
			params,
			alpha: 1.0,
			alpha_decay: 1.0 - ALPHA_MIN.powf(1.0 / 300.0),
			alpha_target: 0.0,
			running: true,
			rng: Lcg(1),
		}
	}

	#[cfg(test)]
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	#[cfg(test)]
	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn restart(&mut self) {
		self.running = true;
	}

	#[cfg(test)]
	pub fn body(&self, idx: usize) -> &Body {
		&self.bodies[idx]
	}

	pub fn position(&self, idx: usize) -> Point {
		let b = &self.bodies[idx];
		Point { x: b.x, y: b.y }
	}

	pub fn positions(&self) -> Vec<Point> {
		self.bodies.iter().map(|b| Point { x: b.x, y: b.y }).collect()
	}

	pub fn fix(&mut self, idx: usize, x: f64, y: f64) {
		let body = &mut self.bodies[idx];
		body.fx = Some(x);
		body.fy = Some(y);
	}

	pub fn release(&mut self, idx: usize) {
		let body = &mut self.bodies[idx];
		body.fx = None;
		body.fy = None;
	}

	/// One animation-frame step: tick, then stop once alpha has decayed.
	pub fn step(&mut self) {
		self.tick();
		if self.alpha < ALPHA_MIN {
			self.running = false;
		}
	}

	pub fn tick(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;

		self.apply_links();
		self.apply_collide();
		self.apply_center();
		self.apply_positional();

		for body in &mut self.bodies {
			match body.fx {
				Some(fx) => {
					body.x = fx;
					body.vx = 0.0;
				}
				None => {
					body.vx *= 1.0 - VELOCITY_DECAY;
					body.x += body.vx;
				}
			}
			match body.fy {
				Some(fy) => {
					body.y = fy;
					body.vy = 0.0;
				}
				None => {
					body.vy *= 1.0 - VELOCITY_DECAY;
					body.y += body.vy;
				}
			}
		}
	}

	fn apply_links(&mut self) {
		let distance = self.params.link_distance;
		for (i, link) in self.links.iter().enumerate() {
			let (s, t) = (&self.bodies[link.source], &self.bodies[link.target]);
			let mut x = t.x + t.vx - s.x - s.vx;
			let mut y = t.y + t.vy - s.y - s.vy;
			if x == 0.0 {
				x = self.rng.jiggle();
			}
			if y == 0.0 {
				y = self.rng.jiggle();
			}
			let mut l = (x * x + y * y).sqrt();
			l = (l - distance) / l * self.alpha * self.link_strength[i];
			x *= l;
			y *= l;

			let b = self.link_bias[i];
			let target = &mut self.bodies[link.target];
			target.vx -= x * b;
			target.vy -= y * b;
			let source = &mut self.bodies[link.source];
			source.vx += x * (1.0 - b);
			source.vy += y * (1.0 - b);
		}
	}

	/// Pairwise collision on predicted positions. All bodies share one
	/// radius, so each side of a collision absorbs half of the correction.
	fn apply_collide(&mut self) {
		let r = self.params.collide_radius;
		let reach = r + r;
		let n = self.bodies.len();
		for i in 0..n {
			let (xi, yi) = {
				let b = &self.bodies[i];
				(b.x + b.vx, b.y + b.vy)
			};
			for j in (i + 1)..n {
				let other = &self.bodies[j];
				let mut x = xi - other.x - other.vx;
				let mut y = yi - other.y - other.vy;
				let mut l = x * x + y * y;
				if l >= reach * reach {
					continue;
				}
				if x == 0.0 {
					x = self.rng.jiggle();
					l += x * x;
				}
				if y == 0.0 {
					y = self.rng.jiggle();
					l += y * y;
				}
				l = l.sqrt();
				l = (reach - l) / l;
				x *= l;
				y *= l;

				let share = (r * r) / (r * r + r * r);
				let body = &mut self.bodies[i];
				body.vx += x * share;
				body.vy += y * share;
				let other = &mut self.bodies[j];
				other.vx -= x * (1.0 - share);
				other.vy -= y * (1.0 - share);
			}
		}
	}

	fn apply_center(&mut self) {
		if self.bodies.is_empty() {
			return;
		}
		let n = self.bodies.len() as f64;
		let (sx, sy) = self
			.bodies
			.iter()
			.fold((0.0, 0.0), |(sx, sy), b| (sx + b.x, sy + b.y));
		let (dx, dy) = (sx / n - self.params.center.x, sy / n - self.params.center.y);
		for body in &mut self.bodies {
			body.x -= dx;
			body.y -= dy;
		}
	}

	fn apply_positional(&mut self) {
		let (kx, ky) = (
			self.params.x_strength * self.alpha,
			self.params.y_strength * self.alpha,
		);
		for (body, target) in self.bodies.iter_mut().zip(&self.targets) {
			body.vx += (target.x - body.x) * kx;
			body.vy += (target.y - body.y) * ky;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params() -> ForceParams {
		ForceParams {
			link_distance: 30.0,
			collide_radius: 30.0,
			center: Point { x: 400.0, y: 300.0 },
			x_strength: 0.02,
			y_strength: 0.1,
		}
	}

	fn targets(n: usize) -> Vec<Point> {
		vec![Point { x: 400.0, y: 300.0 }; n]
	}

	#[test]
	fn alpha_decays_until_the_simulation_stops() {
		let mut sim = Simulation::new(targets(3), vec![Link { source: 0, target: 1 }], params());
		let mut ticks = 0;
		while sim.is_running() {
			sim.step();
			ticks += 1;
			assert!(ticks < 1000, "simulation never settled");
		}
		assert!(sim.alpha() < ALPHA_MIN);
		assert!((295..=305).contains(&ticks), "settled after {ticks} ticks");
	}

	#[test]
	fn raised_alpha_target_keeps_running() {
		let mut sim = Simulation::new(targets(2), vec![], params());
		sim.set_alpha_target(0.3);
		for _ in 0..1000 {
			sim.step();
		}
		assert!(sim.is_running());
		assert!((sim.alpha() - 0.3).abs() < 1e-3);
	}

	#[test]
	fn center_force_moves_mean_to_center() {
		let mut sim = Simulation::new(targets(5), vec![], params());
		sim.apply_center();
		let positions = sim.positions();
		let mean_x = positions.iter().map(|p| p.x).sum::<f64>() / 5.0;
		let mean_y = positions.iter().map(|p| p.y).sum::<f64>() / 5.0;
		assert!((mean_x - 400.0).abs() < 1e-9);
		assert!((mean_y - 300.0).abs() < 1e-9);
	}

	#[test]
	fn positional_force_pulls_toward_target() {
		let mut sim = Simulation::new(vec![Point { x: 100.0, y: 50.0 }], vec![], params());
		sim.bodies[0].x = 0.0;
		sim.bodies[0].y = 0.0;
		sim.apply_positional();
		assert!((sim.bodies[0].vx - 2.0).abs() < 1e-9);
		assert!((sim.bodies[0].vy - 5.0).abs() < 1e-9);
	}

	#[test]
	fn overlapping_bodies_are_pushed_apart() {
		let mut sim = Simulation::new(targets(2), vec![], params());
		sim.bodies[0].x = 0.0;
		sim.bodies[0].y = 0.0;
		sim.bodies[1].x = 10.0;
		sim.bodies[1].y = 0.0;
		sim.apply_collide();
		assert!(sim.bodies[0].vx < 0.0);
		assert!(sim.bodies[1].vx > 0.0);
		assert!((sim.bodies[0].vx + sim.bodies[1].vx).abs() < 1e-9);
	}

	#[test]
	fn link_pulls_distant_endpoints_together() {
		let mut sim = Simulation::new(targets(2), vec![Link { source: 0, target: 1 }], params());
		sim.bodies[0].x = 0.0;
		sim.bodies[0].y = 0.0;
		sim.bodies[1].x = 200.0;
		sim.bodies[1].y = 0.0;
		sim.apply_links();
		assert!(sim.bodies[0].vx > 0.0);
		assert!(sim.bodies[1].vx < 0.0);
	}

	#[test]
	fn fixed_body_ignores_forces() {
		let mut sim = Simulation::new(targets(3), vec![Link { source: 0, target: 1 }], params());
		sim.fix(0, 5.0, 7.0);
		for _ in 0..10 {
			sim.tick();
		}
		assert_eq!(sim.position(0), Point { x: 5.0, y: 7.0 });
		assert_eq!(sim.body(0).vx, 0.0);

		sim.release(0);
		assert!(sim.body(0).fx.is_none());
		sim.tick();
		assert_ne!(sim.position(0), Point { x: 5.0, y: 7.0 });
	}
}
