//! Demo Service - runs the scripted pattern demos.
//!
//! Every demo builds its domain objects, asks them for their lines and
//! forwards each line to the [`Console`] port in order.

use std::{f64::consts::FRAC_PI_2, sync::Arc};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        catalog::{DEMO_REGISTRY, DemoKind},
        ports::Console,
    },
    domain::{
        Color, DrinkKind, DomainError, Size, Topping,
        behavioral::observer::{EmployeeBonus, ManagerBonus, Salary},
        creational::{
            drinks::HotDrinkMachine,
            html::HtmlBuilder,
            person::{Person, PersonInfoBuilder, PersonJobBuilder},
            point::{Point, PointFactory},
        },
        neural::Network,
        principles::{
            dependency_inversion::{self, Relationships, Research},
            interface_segregation::{
                Document, FlatbedScanner, LaserPrinter, Machine, MultiFunctionMachine,
                MultiFunctionPrinter, OldFashionedPrinter, Photocopier, Printer, Scanner,
            },
            liskov::{Rectangle, Shape, Square, area},
            open_closed::{
                BetterFilter, ColorSpecification, Filter, Product, ProductFilter,
                SizeSpecification, SpecificationExt,
            },
            single_responsibility::Journal,
        },
        structural::{
            bridge::{
                FavouriteRemote, HitachiLedTv, Remote, RemoteControl, SamsungLedTv, SonyLedTv,
            },
            composite::GraphicObject,
            decorator::{Pizza, PizzaExt, PlainPizza},
            messaging::{Delivery, Message, MessageRoute},
        },
    },
    error::PatternResult,
};

/// Tunables for the scripted runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSettings {
    /// Millilitres poured by the drink demo.
    pub drink_amount: u32,
    /// Favourite channel of the Hitachi remote in the TV demo.
    pub favourite_channel: u16,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            drink_amount: 12,
            favourite_channel: 7,
        }
    }
}

/// Runs demos and writes their output through a [`Console`].
pub struct DemoService {
    console: Arc<dyn Console>,
    settings: DemoSettings,
}

impl DemoService {
    /// Create a service with default settings.
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self::with_settings(console, DemoSettings::default())
    }

    pub fn with_settings(console: Arc<dyn Console>, settings: DemoSettings) -> Self {
        Self { console, settings }
    }

    /// Run one demo from start to finish.
    #[instrument(skip(self), fields(demo = %kind))]
    pub fn run(&self, kind: DemoKind) -> PatternResult<()> {
        info!("Running demo");
        self.console.heading(kind.as_str())?;

        match kind {
            DemoKind::TvBridge => self.tv_bridge(),
            DemoKind::MessageBridge => self.message_bridge(),
            DemoKind::Specification => self.specification(),
            DemoKind::HtmlBuilder => self.html_builder(),
            DemoKind::PersonBuilder => self.person_builder(),
            DemoKind::PointFactory => self.point_factory(),
            DemoKind::DrinkFactory => self.drink_factory(),
            DemoKind::Composite => self.composite(),
            DemoKind::Observer => self.observer(),
            DemoKind::Decorator => self.decorator(),
            DemoKind::SingleResponsibility => self.single_responsibility(),
            DemoKind::Liskov => self.liskov(),
            DemoKind::InterfaceSegregation => self.interface_segregation(),
            DemoKind::DependencyInversion => self.dependency_inversion(),
            DemoKind::NeuralNetwork => self.neural_network(),
        }
    }

    /// Run every demo in catalog order, stopping at the first failure.
    pub fn run_all(&self) -> PatternResult<usize> {
        for def in DEMO_REGISTRY {
            self.run(def.kind)?;
        }
        info!(count = DEMO_REGISTRY.len(), "All demos finished");
        Ok(DEMO_REGISTRY.len())
    }

    /// Send `text` along the route picked by `selector` and print the outcome.
    ///
    /// `1` sends a long message by SMS; any other number sends a short
    /// message by email, which refuses ten characters or more.
    #[instrument(skip(self, text), fields(len = text.chars().count()))]
    pub fn send_message(&self, selector: i64, text: &str) -> PatternResult<Delivery> {
        let route = MessageRoute::from_selector(selector);
        debug!(?route, "Message route selected");

        let delivery = route.build().send(text);
        self.console.write_line(delivery.line())?;
        Ok(delivery)
    }

    /// Parse a typed-in selector, then [`Self::send_message`].
    pub fn send_message_from_input(&self, selector: &str, text: &str) -> PatternResult<Delivery> {
        let selector = selector
            .trim()
            .parse::<i64>()
            .map_err(|_| ApplicationError::InvalidSelector {
                input: selector.to_string(),
            })?;
        self.send_message(selector, text)
    }

    /// Prepare and consume one drink.
    #[instrument(skip(self))]
    pub fn make_drink(&self, kind: DrinkKind, amount_ml: u32) -> PatternResult<()> {
        let machine = HotDrinkMachine::new();
        self.serve(&machine, kind, amount_ml)
    }

    fn serve(&self, machine: &HotDrinkMachine, kind: DrinkKind, amount_ml: u32) -> PatternResult<()> {
        let prepared = machine.make_drink(kind, amount_ml)?;
        self.console.write_line(&prepared.steps)?;
        self.console.write_line(&prepared.drink.consume())
    }

    fn write_all<I, S>(&self, lines: I) -> PatternResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.console.write_line(line.as_ref())?;
        }
        Ok(())
    }

    // ── Structural ────────────────────────────────────────────────────────────

    fn tv_bridge(&self) -> PatternResult<()> {
        let mut sony = RemoteControl::new(Box::new(SonyLedTv));
        let mut samsung = RemoteControl::new(Box::new(SamsungLedTv));
        let mut hitachi =
            FavouriteRemote::new(Box::new(HitachiLedTv), self.settings.favourite_channel);

        self.write_all([sony.switch_on(), sony.set_channel(1), sony.switch_off()])?;
        self.write_all([
            samsung.switch_on(),
            samsung.set_channel(3),
            samsung.switch_off(),
        ])?;
        self.write_all([
            hitachi.switch_on(),
            hitachi.favourite(),
            hitachi.switch_off(),
        ])
    }

    fn message_bridge(&self) -> PatternResult<()> {
        self.send_message(1, "Hello from the long channel")?;
        self.send_message(2, "Hi there")?;
        self.send_message(2, "This one is far too long")?;
        Ok(())
    }

    fn composite(&self) -> PatternResult<()> {
        let drawing = GraphicObject::group("My Drawing")
            .with(GraphicObject::square(Color::Red))
            .with(GraphicObject::circle(Color::Yellow))
            .with(
                GraphicObject::new()
                    .with(GraphicObject::circle(Color::Blue))
                    .with(GraphicObject::square(Color::Blue)),
            );
        self.write_all(drawing.lines())
    }

    fn decorator(&self) -> PatternResult<()> {
        self.write_all([
            PlainPizza.make(),
            PlainPizza.with(Topping::Chicken).make(),
            PlainPizza.with(Topping::Vegetables).make(),
            PlainPizza
                .with(Topping::Chicken)
                .with(Topping::Fish)
                .with(Topping::Egg)
                .make(),
        ])
    }

    fn neural_network(&self) -> PatternResult<()> {
        let mut net = Network::new();
        let neuron1 = net.add_neuron();
        let neuron2 = net.add_neuron();
        let layer1 = net.add_layer(3);
        let layer2 = net.add_layer(4);

        let links = net.connect(&neuron1, &neuron2);
        self.console
            .write_line(&format!("neuron -> neuron: {links} link(s)"))?;
        let links = net.connect(&neuron1, &layer1);
        self.console
            .write_line(&format!("neuron -> layer of {}: {links} link(s)", layer1.len()))?;
        let links = net.connect(&layer1, &layer2);
        self.console.write_line(&format!(
            "layer of {} -> layer of {}: {links} link(s)",
            layer1.len(),
            layer2.len()
        ))?;
        self.console.write_line(&format!(
            "{} neurons, {} links in total",
            net.len(),
            net.link_count()
        ))
    }

    // ── Creational ────────────────────────────────────────────────────────────

    fn html_builder(&self) -> PatternResult<()> {
        let mut builder = HtmlBuilder::new("ul");
        builder.add_child("li", "hello").add_child("li", "world");
        self.write_all(builder.to_string().lines())
    }

    fn person_builder(&self) -> PatternResult<()> {
        let me = Person::builder()
            .called("Amal")
            .works_as_a("Engineer")
            .build();
        self.console.write_line(&me.to_string())
    }

    fn point_factory(&self) -> PatternResult<()> {
        let points = [
            Point::origin(),
            PointFactory::cartesian(3.0, 4.0),
            PointFactory::polar(1.0, FRAC_PI_2),
        ];
        self.write_all(points.iter().map(Point::to_string))
    }

    fn drink_factory(&self) -> PatternResult<()> {
        let machine = HotDrinkMachine::new();
        for kind in machine.available() {
            self.serve(&machine, kind, self.settings.drink_amount)?;
        }
        Ok(())
    }

    // ── Behavioral ────────────────────────────────────────────────────────────

    fn observer(&self) -> PatternResult<()> {
        let mut salary = Salary::new();
        salary.attach(Box::new(ManagerBonus));
        salary.attach(Box::new(EmployeeBonus));

        self.write_all(salary.set(1000))?;
        self.write_all(salary.set(2000))
    }

    // ── Principles ────────────────────────────────────────────────────────────

    fn single_responsibility(&self) -> PatternResult<()> {
        let mut journal = Journal::new();
        journal.add_entry("I cried today");
        journal.add_entry("I ate a bug");
        self.write_all(journal.entries())
    }

    fn specification(&self) -> PatternResult<()> {
        let products = vec![
            Product::new("Apple", Color::Green, Size::Small)?,
            Product::new("Tree", Color::Green, Size::Large)?,
            Product::new("House", Color::Blue, Size::Large)?,
        ];

        self.console.write_line("Green products (old):")?;
        self.write_all(
            ProductFilter
                .by_color(&products, Color::Green)
                .map(|p| format!(" - {} is green", p.name)),
        )?;

        let green = ColorSpecification::new(Color::Green);
        self.console.write_line("Green products (new):")?;
        self.write_all(
            BetterFilter
                .filter(&products, &green)
                .map(|p| format!(" - {} is green", p.name)),
        )?;

        let large_blue = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
        self.console.write_line("Large blue items:")?;
        self.write_all(
            BetterFilter
                .filter(&products, &large_blue)
                .map(|p| format!(" - {} is big and blue", p.name)),
        )
    }

    fn liskov(&self) -> PatternResult<()> {
        let rectangle = Rectangle::new(2, 3);
        self.console
            .write_line(&format!("{rectangle} has area {}", area(&rectangle)))?;

        let mut square: Box<dyn Shape> = Box::new(Square::new(0));
        square.set_width(4);
        self.console
            .write_line(&format!("{square} has area {}", area(square.as_ref())))
    }

    fn interface_segregation(&self) -> PatternResult<()> {
        let doc = Document::new("Quarterly report");

        let machines: [(&str, &dyn Machine); 2] = [
            ("MultiFunctionPrinter", &MultiFunctionPrinter),
            ("OldFashionedPrinter", &OldFashionedPrinter),
        ];
        for (name, machine) in machines {
            for outcome in [machine.print(&doc), machine.scan(&doc), machine.fax(&doc)] {
                match outcome {
                    Ok(line) => self.console.write_line(&format!("{name}: {line}"))?,
                    Err(err @ DomainError::NotImplemented { .. }) => {
                        self.console.write_line(&format!("{name}: {err}"))?
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let copier = Photocopier;
        let combo = MultiFunctionMachine::new(Box::new(LaserPrinter), Box::new(FlatbedScanner));
        self.write_all([
            copier.print(&doc),
            copier.scan(&doc),
            combo.print(&doc),
            combo.scan(&doc),
        ])
    }

    fn dependency_inversion(&self) -> PatternResult<()> {
        let john = dependency_inversion::Person::new("John")?;
        let chris = dependency_inversion::Person::new("Chris")?;
        let matt = dependency_inversion::Person::new("Matt")?;

        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(&john, &chris);
        relationships.add_parent_and_child(&john, &matt);

        let research = Research::new(&relationships);
        self.write_all(research.children_report(&john.name))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().map(|l| l.clone()).unwrap_or_default()
        }
    }

    impl Console for Recorder {
        fn write_line(&self, line: &str) -> PatternResult<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    fn service() -> (Arc<Recorder>, DemoService) {
        let recorder = Arc::new(Recorder::default());
        let service = DemoService::new(recorder.clone());
        (recorder, service)
    }

    #[test]
    fn observer_demo_prints_both_bonuses_twice() {
        let (out, service) = service();
        service.run(DemoKind::Observer).unwrap();
        assert_eq!(
            out.lines(),
            [
                "observer",
                "Manager Bonus is 3000",
                "Employee Bonus is 2000",
                "Manager Bonus is 6000",
                "Employee Bonus is 4000",
            ]
        );
    }

    #[test]
    fn tv_bridge_uses_favourite_channel() {
        let recorder = Arc::new(Recorder::default());
        let service = DemoService::with_settings(
            recorder.clone(),
            DemoSettings {
                favourite_channel: 5,
                ..DemoSettings::default()
            },
        );
        service.run(DemoKind::TvBridge).unwrap();
        let lines = recorder.lines();
        assert_eq!(lines[1], "Switch on : Sony TV");
        assert_eq!(lines[2], "Setting channel number : 1 on Sony TV");
        assert!(lines.contains(&"Setting channel number : 05 on Hitachi TV".to_string()));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn short_message_is_rejected_when_too_long() {
        let (out, service) = service();
        let delivery = service.send_message(2, "0123456789").unwrap();
        assert!(!delivery.is_sent());
        assert_eq!(
            out.lines(),
            ["Unable to send message, length size >= 10"]
        );
    }

    #[test]
    fn selector_one_goes_by_sms() {
        let (out, service) = service();
        service.send_message(1, "a rather long message").unwrap();
        assert_eq!(
            out.lines(),
            ["a rather long message this message send by SMS"]
        );
    }

    #[test]
    fn non_numeric_selector_is_rejected() {
        let (_, service) = service();
        let err = service.send_message_from_input("two", "hi").unwrap_err();
        assert!(matches!(
            err,
            crate::error::PatternError::Application(ApplicationError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn make_drink_prints_steps_then_taste() {
        let (out, service) = service();
        service.make_drink(DrinkKind::Coffee, 200).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Grind some beans, boil water, pour 200 ml, add cream and sugar, enjoy!",
                "This coffee is sensational!",
            ]
        );
    }

    #[test]
    fn specification_demo_lists_matches() {
        let (out, service) = service();
        service.run(DemoKind::Specification).unwrap();
        let lines = out.lines();
        assert!(lines.contains(&" - House is big and blue".to_string()));
        assert_eq!(
            lines.iter().filter(|l| l.ends_with("is green")).count(),
            4
        );
    }

    #[test]
    fn isp_demo_reports_not_implemented() {
        let (out, service) = service();
        service.run(DemoKind::InterfaceSegregation).unwrap();
        assert!(
            out.lines()
                .contains(&"OldFashionedPrinter: OldFashionedPrinter does not implement 'fax'".to_string())
        );
    }

    #[test]
    fn run_all_covers_every_demo() {
        let (out, service) = service();
        assert_eq!(service.run_all().unwrap(), DEMO_REGISTRY.len());
        let lines = out.lines();
        for def in DEMO_REGISTRY {
            assert!(lines.contains(&def.kind.as_str().to_string()));
        }
    }
}
