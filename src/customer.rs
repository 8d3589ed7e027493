//! Customers, their cars and the cost of their shopping trips.
use crate::geometry::{Point, distance};
use crate::id::{define_id_getter, define_id_type};
use crate::shop::{Cart, Receipt, Shop};
use crate::units::{Distance, LitresPerHundredDistance, Money, MoneyPerLitre};
use log::{debug, info};

define_id_type! {CustomerID}

/// A customer's car
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// The make of the car (e.g. "Suzuki")
    pub brand: String,
    /// Fuel burnt per 100 units of distance travelled
    pub fuel_consumption: LitresPerHundredDistance,
}

/// The cost breakdown of a prospective round trip to a shop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripQuote {
    /// Distance from the customer's home to the shop
    pub distance: Distance,
    /// Cost of fuel for the journey to the shop
    pub fuel_cost_one_way: Money,
    /// Cost of fuel for the journey home. The route home mirrors the route there.
    pub fuel_cost_home: Money,
    /// Cost of the customer's cart at the shop
    pub products_cost: Money,
}

impl TripQuote {
    /// The unrounded cost of the whole trip
    pub fn total(&self) -> Money {
        self.fuel_cost_one_way + self.products_cost + self.fuel_cost_home
    }

    /// The cost of the whole trip rounded to the nearest cent, as used to compare shops
    pub fn rounded_total(&self) -> Money {
        self.total().round_to_cents()
    }
}

/// Someone who drives to a shop to buy the products in their cart
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// The customer's name
    pub id: CustomerID,
    /// The products the customer wants to buy
    pub cart: Cart,
    /// The customer's car
    pub car: Car,
    /// The price of a litre of fuel
    pub fuel_price: MoneyPerLitre,
    location: Point,
    home: Point,
    money: Money,
}
define_id_getter! {Customer, CustomerID}

impl Customer {
    /// Create a new [`Customer`] who is at home
    pub fn new(
        id: CustomerID,
        cart: Cart,
        home: Point,
        money: Money,
        car: Car,
        fuel_price: MoneyPerLitre,
    ) -> Self {
        Self {
            id,
            cart,
            car,
            fuel_price,
            location: home,
            home,
            money,
        }
    }

    /// Where the customer currently is
    pub fn location(&self) -> Point {
        self.location
    }

    /// Where the customer lives
    pub fn home(&self) -> Point {
        self.home
    }

    /// How much money the customer has
    pub fn money(&self) -> Money {
        self.money
    }

    /// The cost of the fuel needed to travel the given distance
    pub fn fuel_cost(&self, distance: Distance) -> Money {
        self.car.fuel_consumption.fuel_needed(distance) * self.fuel_price
    }

    /// Work out how much a round trip from home to `shop` would cost.
    ///
    /// Distances are always measured from home, so the quote is only meaningful before the
    /// customer sets off.
    pub fn quote_trip(&self, shop: &Shop) -> TripQuote {
        let distance_to_shop = distance(self.home, shop.location);
        let fuel_cost_one_way = self.fuel_cost(distance_to_shop);

        TripQuote {
            distance: distance_to_shop,
            fuel_cost_one_way,
            fuel_cost_home: fuel_cost_one_way,
            products_cost: shop.total_price(&self.cart),
        }
    }

    /// The total cost of a round trip to `shop`, rounded to the nearest cent
    pub fn total_trip_cost(&self, shop: &Shop) -> Money {
        self.quote_trip(shop).rounded_total()
    }

    /// Drive to `shop`, buy everything in the cart and drive home again.
    ///
    /// Money is deducted in three steps: fuel there, the products, then fuel home. The caller is
    /// responsible for checking the customer can afford the trip beforehand.
    pub fn ride_to_shop(&mut self, shop: &Shop) -> Receipt {
        info!("{} rides to {}", self.id, shop.id);
        let quote = self.quote_trip(shop);
        debug!("{} trip quote: {quote:?}", self.id);

        self.money -= quote.fuel_cost_one_way;
        self.location = shop.location;

        let receipt = shop.commit_purchase(&self.id, &self.cart);
        self.money -= receipt.total;

        info!("{} rides home", self.id);
        self.money -= quote.fuel_cost_home;
        self.location = self.home;

        info!("{} now has {:.2} dollars", self.id, self.money);

        receipt
    }
}
