//! Vehicle type: one route plus a capacity limit.

use super::{Node, Route};

/// A vehicle owning exactly one route.
///
/// The vehicle reports its load but does not reject overloads; keeping
/// loads within capacity is up to whoever moves customers.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::models::{Node, Route, Vehicle};
///
/// let d = Node::depot(0);
/// let v = Vehicle::new(100, Route::new([d, Node::customer(1, 30), d]));
/// assert_eq!(v.capacity(), 100);
/// assert_eq!(v.load(), 30);
/// assert_eq!(v.residual_capacity(), 70);
///
/// let void = Vehicle::void(100, d);
/// assert!(void.is_void());
/// ```
#[derive(Debug, Clone)]
pub struct Vehicle {
    capacity: i32,
    route: Route,
}

impl Vehicle {
    /// Creates a vehicle with the given capacity serving `route`.
    pub fn new(capacity: i32, route: Route) -> Self {
        Self { capacity, route }
    }

    /// Creates an unused vehicle whose route is `[depot, depot]`.
    pub fn void(capacity: i32, depot: Node) -> Self {
        Self::new(capacity, Route::void(depot))
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// The route served by this vehicle.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Mutable access to the route.
    pub fn route_mut(&mut self) -> &mut Route {
        &mut self.route
    }

    /// Replaces the route.
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    /// Current load, i.e. the route demand.
    pub fn load(&self) -> i32 {
        self.route.demand()
    }

    /// Capacity left before the vehicle is overloaded.
    pub fn residual_capacity(&self) -> i32 {
        self.capacity - self.load()
    }

    /// Returns `true` if the load exceeds the capacity.
    pub fn is_overloaded(&self) -> bool {
        self.load() > self.capacity
    }

    /// Returns `true` if the route carries zero demand.
    pub fn is_void(&self) -> bool {
        self.load() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_load() {
        let d = Node::depot(0);
        let v = Vehicle::new(
            10,
            Route::new([d, Node::customer(1, 6), Node::customer(2, 7), d]),
        );
        assert_eq!(v.load(), 13);
        assert_eq!(v.residual_capacity(), -3);
        assert!(v.is_overloaded());
        assert!(!v.is_void());
    }

    #[test]
    fn test_vehicle_void() {
        let v = Vehicle::void(50, Node::depot(0));
        assert_eq!(v.capacity(), 50);
        assert_eq!(v.route().node_ids(), vec![0, 0]);
        assert!(v.is_void());
        assert!(!v.is_overloaded());
    }

    #[test]
    fn test_route_mut_updates_load() {
        let d = Node::depot(0);
        let mut v = Vehicle::void(50, d);
        v.route_mut()
            .insert_at(1, [Node::customer(3, 20)])
            .expect("in range");
        assert_eq!(v.load(), 20);
        assert!(v.route().is_valid());

        v.set_route(Route::void(d));
        assert!(v.is_void());
    }
}
